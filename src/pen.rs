use crate::colour::{colours, Colour};
use crate::units::Px;

/// The colour and stroke width used for text and table borders
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Pen {
    pub colour: Colour,
    /// Stroke width in pixels
    pub weight: i32,
}

impl Pen {
    pub fn new<W: Into<Px>>(colour: Colour, weight: W) -> Pen {
        Pen {
            colour,
            weight: weight.into().0.max(0),
        }
    }
}

impl Default for Pen {
    /// Black, 6 pixels wide
    fn default() -> Self {
        Pen {
            colour: colours::BLACK,
            weight: 6,
        }
    }
}
