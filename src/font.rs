use crate::colour::Colour;
use crate::rect::Point;
use crate::shaper::{Shaper, REFERENCE_GLYPHS};
use crate::surface::Surface;
use crate::units::DPI;
use crate::RasterError;
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder, OwnedFace};
use std::fmt;
use std::path::Path;
use tiny_skia::{FillRule, Mask, PathBuilder, Transform};

/// A parsed font object. Fonts can be TTF or OTF fonts.
///
/// Fonts are registered with a [`FontBook`] and referred to throughout documents
/// by their [`FontId`] within that book.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RasterError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, RasterError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Scaling factor from font units to pixels for a font rendered `pixels_per_em` tall
    fn scaling(&self, pixels_per_em: f32) -> f32 {
        pixels_per_em / self.face.as_face_ref().units_per_em() as f32
    }

    /// Look up the glyph for a character, falling back to the replacement character and
    /// then to a question mark
    pub fn glyph(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Unrounded width of `text` in pixels
    pub fn width_of_text(&self, text: &str, pixels_per_em: f32) -> f32 {
        let scaling = self.scaling(pixels_per_em);
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|gid| {
                scaling * self.face.as_face_ref().glyph_hor_advance(gid).unwrap_or_default() as f32
            })
            .sum()
    }

    /// Unrounded height in pixels of the union of the bounding boxes of the glyphs in `text`
    pub fn height_of_text(&self, text: &str, pixels_per_em: f32) -> f32 {
        let face = self.face.as_face_ref();
        let (top, bottom) = text
            .chars()
            .filter_map(|ch| self.glyph(ch))
            .filter_map(|gid| face.glyph_bounding_box(gid))
            .fold((i16::MIN, i16::MAX), |(top, bottom), bbox| {
                (top.max(bbox.y_max), bottom.min(bbox.y_min))
            });
        if top < bottom {
            return 0.0;
        }
        self.scaling(pixels_per_em) * (top as f32 - bottom as f32)
    }
}

/// Refers to a font within a [`FontBook`]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FontId(pub usize);

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The fonts available to a document, and the [`Shaper`] that measures and draws
/// text with them. Font sizes are given in points and converted to pixels at the
/// book's resolution.
pub struct FontBook {
    fonts: Vec<Font>,
    dpi: f32,
}

impl Default for FontBook {
    fn default() -> Self {
        FontBook {
            fonts: Vec::new(),
            dpi: DPI,
        }
    }
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Use a resolution other than [`DPI`] when converting point sizes to pixels
    pub fn with_dpi(mut self, dpi: f32) -> FontBook {
        self.dpi = dpi;
        self
    }

    /// Add a font to the book, returning the id to refer to it by
    pub fn add_font(&mut self, font: Font) -> FontId {
        self.fonts.push(font);
        FontId(self.fonts.len() - 1)
    }

    pub fn get(&self, id: FontId) -> Option<&Font> {
        self.fonts.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn pixels_per_em(&self, size: f32) -> f32 {
        size * self.dpi / 72.0
    }
}

impl Shaper for FontBook {
    fn has_font(&self, font: FontId) -> bool {
        self.get(font).is_some()
    }

    fn measure(&self, font: FontId, size: f32, text: &str) -> i32 {
        self.get(font)
            .map(|f| f.width_of_text(text, self.pixels_per_em(size)).ceil() as i32)
            .unwrap_or_default()
    }

    fn line_height(&self, font: FontId, size: f32) -> i32 {
        self.get(font)
            .map(|f| {
                f.height_of_text(REFERENCE_GLYPHS, self.pixels_per_em(size))
                    .ceil() as i32
            })
            .unwrap_or_default()
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        font: FontId,
        size: f32,
        colour: Colour,
        text: &str,
        origin: Point,
    ) {
        let Some(font) = self.get(font) else {
            log::warn!("cannot draw {text:?}: font {font} is not in the font book");
            return;
        };
        let face = font.face.as_face_ref();
        let scale = font.scaling(self.pixels_per_em(size));

        let mut builder = GlyphPathBuilder::new(origin.x as f32, origin.y as f32, scale);
        for ch in text.chars() {
            let Some(gid) = font.glyph(ch) else {
                continue;
            };
            face.outline_glyph(gid, &mut builder);
            builder.origin_x += scale * face.glyph_hor_advance(gid).unwrap_or_default() as f32;
        }
        let Some(path) = builder.builder.finish() else {
            // nothing but whitespace
            return;
        };

        let bounds = path.bounds();
        let x0 = bounds.left().floor() as i32;
        let y0 = bounds.top().floor() as i32;
        let width = (bounds.right().ceil() as i32 - x0).max(1);
        let height = (bounds.bottom().ceil() as i32 - y0).max(1);
        let Some(mut mask) = Mask::new(width as u32, height as u32) else {
            return;
        };
        mask.fill_path(
            &path,
            FillRule::Winding,
            true,
            Transform::from_translate(-x0 as f32, -y0 as f32),
        );

        for (i, &coverage) in mask.data().iter().enumerate() {
            if coverage == 0 {
                continue;
            }
            let x = x0 + (i as i32 % width);
            let y = y0 + (i as i32 / width);
            surface.blend_pixel(x, y, colour, coverage);
        }
    }
}

/// Collects glyph outlines into a single path in pixel space, flipping the font's
/// y-up coordinates to the surface's y-down coordinates around the baseline.
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            origin_x,
            origin_y,
            scale,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
