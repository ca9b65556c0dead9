#![allow(dead_code)]

use raster_gen::image::{Rgba, RgbaImage};
use raster_gen::layout::Margins;
use raster_gen::{colours, Canvas, Colour, FontId, Pen, Point, Px, Rect, Shaper, Surface, Theme};
use std::cell::RefCell;

pub const ADVANCE: i32 = 10;
pub const LINE_HEIGHT: i32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub text: String,
    pub origin: Point,
    pub font: FontId,
    pub size: f32,
    pub colour: Colour,
}

/// Every character is `ADVANCE` pixels wide and every line `LINE_HEIGHT` tall,
/// whatever the font or size. Draws nothing, but remembers what it was asked to draw.
pub struct MonoShaper {
    pub fonts: usize,
    pub calls: RefCell<Vec<DrawCall>>,
}

impl MonoShaper {
    pub fn new() -> MonoShaper {
        MonoShaper {
            fonts: 2,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    /// The text and baseline origin of each draw call
    pub fn placements(&self) -> Vec<(String, Point)> {
        self.calls
            .borrow()
            .iter()
            .map(|c| (c.text.clone(), c.origin))
            .collect()
    }
}

impl Shaper for MonoShaper {
    fn has_font(&self, font: FontId) -> bool {
        font.0 < self.fonts
    }

    fn measure(&self, _font: FontId, _size: f32, text: &str) -> i32 {
        text.chars().count() as i32 * ADVANCE
    }

    fn line_height(&self, _font: FontId, _size: f32) -> i32 {
        LINE_HEIGHT
    }

    fn draw(
        &self,
        _surface: &mut dyn Surface,
        font: FontId,
        size: f32,
        colour: Colour,
        text: &str,
        origin: Point,
    ) {
        self.calls.borrow_mut().push(DrawCall {
            text: text.to_string(),
            origin,
            font,
            size,
            colour,
        });
    }
}

/// Round numbers to make layouts easy to work out by hand: 2px cell padding, a 30px
/// header, 10px rows and a 1px black pen
pub fn theme() -> Theme {
    Theme::new(FontId(0))
        .with_pen(Pen::new(colours::BLACK, Px(1)))
        .with_cell_padding(Margins::all(Px(2)))
        .with_header_height(Px(30))
        .with_row_height(Px(10))
}

pub fn white(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
}

/// A canvas laying out in the top left 200x200 pixels of `image`
pub fn canvas<'a>(image: &'a mut RgbaImage, shaper: &'a MonoShaper) -> Canvas<'a> {
    Canvas::with_rect(image, shaper, theme(), Rect::new(0, 0, 200, 200)).expect("valid canvas")
}

pub fn is_black(image: &RgbaImage, x: u32, y: u32) -> bool {
    image.get_pixel(x, y).0 == [0, 0, 0, 255]
}
