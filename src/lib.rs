mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// The node tree documents are built from, and the algorithms that lay it out
pub mod layout;

mod pen;
pub use pen::*;

mod rect;
pub use rect::*;

pub mod shaper;
pub use shaper::Shaper;

mod surface;
pub use surface::*;

mod theme;
pub use theme::*;

mod units;
pub use units::*;

/// Re-export of the image crate, whose [`RgbaImage`](image::RgbaImage) is the usual render target
pub use image;
