use crate::colour::Colour;
use crate::error::RasterError;
use crate::layout::Node;
use crate::pen::Pen;
use crate::rect::{Point, Rect};
use crate::shaper::Shaper;
use crate::surface::{fill_rect, stroke_rect, Surface};
use crate::theme::Theme;
use image::RgbaImage;

/// The target of a render: a pixel surface, the shaper used to measure and draw
/// text on it, the [`Theme`] supplying defaults, and a write cursor.
///
/// Every call to [`Canvas::write`] lays its node out starting at the cursor and
/// moves the cursor to where the node ended, so independent writes stack
/// vertically.
pub struct Canvas<'a> {
    surface: &'a mut dyn Surface,
    shaper: &'a dyn Shaper,
    theme: Theme,
    rect: Rect,
    cursor: i32,
}

impl<'a> Canvas<'a> {
    /// Create a canvas covering the whole surface
    pub fn new(
        surface: &'a mut dyn Surface,
        shaper: &'a dyn Shaper,
        theme: Theme,
    ) -> Result<Canvas<'a>, RasterError> {
        let rect = surface.bounds();
        Canvas::with_rect(surface, shaper, theme, rect)
    }

    /// Create a canvas that lays documents out within `rect` of the surface.
    ///
    /// Fails if the rectangle has no area, or if the theme's font is unknown to the
    /// shaper, since text could then not be rendered at all.
    pub fn with_rect(
        surface: &'a mut dyn Surface,
        shaper: &'a dyn Shaper,
        theme: Theme,
        rect: Rect,
    ) -> Result<Canvas<'a>, RasterError> {
        if rect.is_empty() {
            return Err(RasterError::EmptyCanvas);
        }
        if !shaper.has_font(theme.font) {
            return Err(RasterError::UnknownFont(theme.font));
        }
        Ok(Canvas {
            surface,
            shaper,
            theme,
            rect,
            cursor: rect.min_y,
        })
    }

    /// Lay out and draw `node` below everything written so far, returning the point
    /// where it ended
    pub fn write(&mut self, node: &Node) -> Point {
        let rect = Rect {
            min_y: self.cursor,
            max_y: self.rect.max_y.max(self.cursor),
            ..self.rect
        };
        let end = node.write_to(self, rect);
        log::debug!("wrote node at y={} ending at {:?}", self.cursor, end);
        self.cursor = self.cursor.max(end.y);
        end
    }

    /// Where the next [`Canvas::write`] will start
    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    /// The area documents are laid out in
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn shaper(&self) -> &dyn Shaper {
        self.shaper
    }

    /// Paint the whole canvas area, typically with a background colour before writing
    pub fn fill(&mut self, colour: Colour) {
        fill_rect(self.surface, self.rect, colour);
    }

    pub(crate) fn stroke_rect(&mut self, rect: Rect, pen: Pen) {
        stroke_rect(self.surface, rect, pen);
    }

    pub(crate) fn draw_text(
        &mut self,
        font: crate::FontId,
        size: f32,
        colour: Colour,
        text: &str,
        origin: Point,
    ) {
        self.shaper
            .draw(self.surface, font, size, colour, text, origin);
    }
}

/// Cut a rendered image down to its content, i.e. everything above `bottom`, which
/// is usually the `y` of the last point returned by [`Canvas::write`]
pub fn crop_to_content(image: &RgbaImage, bottom: i32) -> RgbaImage {
    let height = bottom.clamp(1, image.height() as i32) as u32;
    image::imageops::crop_imm(image, 0, 0, image.width(), height).to_image()
}
