//! The text measuring and drawing capability the layout engine depends on.
//!
//! Layout never touches font files directly: it asks a [`Shaper`] how wide a
//! string is, how tall a line is, and to draw a string with its baseline at a
//! given point. [`FontBook`](crate::FontBook) is the implementation backed by
//! real TrueType/OpenType fonts.

use crate::colour::Colour;
use crate::font::FontId;
use crate::rect::Point;
use crate::surface::Surface;

/// Characters measured to obtain a stable line height. Together they cover the
/// tallest ascender and the deepest descender a line is likely to need, so the
/// line height does not change with the actual text being laid out.
pub const REFERENCE_GLYPHS: &str = ",`Ц|@";

pub trait Shaper {
    /// Whether the shaper can render with the given font
    fn has_font(&self, font: FontId) -> bool;

    /// Width of `text` in whole pixels (rounded up) at `size` points
    fn measure(&self, font: FontId, size: f32, text: &str) -> i32;

    /// Height in whole pixels (rounded up) of the bounding box of
    /// [`REFERENCE_GLYPHS`] at `size` points
    fn line_height(&self, font: FontId, size: f32) -> i32;

    /// Draw `text` onto `surface` with the left end of its baseline at `origin`
    fn draw(
        &self,
        surface: &mut dyn Surface,
        font: FontId,
        size: f32,
        colour: Colour,
        text: &str,
        origin: Point,
    );
}
