use crate::colour::Colour;
use crate::pen::Pen;
use crate::rect::Rect;
use image::RgbaImage;

/// A mutable pixel surface that documents are rendered onto. Writes outside of
/// [`Surface::bounds`] must be silently ignored; layout does not clip.
pub trait Surface {
    /// The addressable area of the surface
    fn bounds(&self) -> Rect;

    /// Overwrite a single pixel
    fn set_pixel(&mut self, x: i32, y: i32, colour: Colour);

    /// Paint a pixel with partial coverage (0 = untouched, 255 = fully covered).
    /// Surfaces that cannot blend treat anything at least half covered as a hit.
    fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour, coverage: u8) {
        if coverage >= 128 {
            self.set_pixel(x, y, colour);
        }
    }
}

impl Surface for RgbaImage {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if !self.bounds().contains(x, y) {
            return;
        }
        self.put_pixel(x as u32, y as u32, colour.into());
    }

    fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour, coverage: u8) {
        if coverage == 0 || !self.bounds().contains(x, y) {
            return;
        }
        let src = colour.to_rgba8();
        let alpha = coverage as u32;
        let dst = self.get_pixel_mut(x as u32, y as u32);
        for (d, s) in dst.0.iter_mut().zip(src.iter()).take(3) {
            *d = ((*s as u32 * alpha + *d as u32 * (255 - alpha) + 127) / 255) as u8;
        }
        dst.0[3] = 255;
    }
}

/// Fill every pixel of `rect` with `colour`
pub fn fill_rect(surface: &mut dyn Surface, rect: Rect, colour: Colour) {
    for y in rect.min_y..rect.max_y {
        for x in rect.min_x..rect.max_x {
            surface.set_pixel(x, y, colour);
        }
    }
}

/// Stroke the outline of `rect` with `pen`. The edges are inclusive and the
/// stroke grows right of the vertical edges and below the horizontal edges, so
/// two rectangles sharing an edge share one stroke.
pub fn stroke_rect(surface: &mut dyn Surface, rect: Rect, pen: Pen) {
    for x in rect.min_x..=rect.max_x {
        for t in 0..pen.weight {
            surface.set_pixel(x, rect.min_y + t, pen.colour);
            surface.set_pixel(x, rect.max_y + t, pen.colour);
        }
    }
    for y in rect.min_y..=rect.max_y {
        for t in 0..pen.weight {
            surface.set_pixel(rect.min_x + t, y, pen.colour);
            surface.set_pixel(rect.max_x + t, y, pen.colour);
        }
    }
}
