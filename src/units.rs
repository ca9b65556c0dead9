//! Lengths used when building documents.
//!
//! Everything is eventually rendered in integer pixels ([`Px`]), but it is
//! usually more natural to describe a receipt in physical units. [`Mm`] and
//! [`In`] convert into pixels at [`DPI`], rounding to the nearest pixel.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// The resolution documents are laid out at
pub const DPI: f32 = 960.0;

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// A length in whole pixels
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub i32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

impl Px {
    /// The raw number of pixels
    pub fn get(self) -> i32 {
        self.0
    }

    /// Convert to inches at [`DPI`]
    pub fn to_inches(self) -> In {
        In(self.0 as f32 / DPI)
    }

    /// Convert to millimetres at [`DPI`]
    pub fn to_millimetres(self) -> Mm {
        Mm(self.0 as f32 / DPI * MM_PER_INCH)
    }
}

impl Mm {
    /// Exact (unrounded) number of pixels this length covers at [`DPI`]
    pub fn to_pixels_f32(self) -> f32 {
        self.0 / MM_PER_INCH * DPI
    }
}

impl In {
    /// Exact (unrounded) number of pixels this length covers at [`DPI`]
    pub fn to_pixels_f32(self) -> f32 {
        self.0 * DPI
    }
}

impl From<Mm> for Px {
    fn from(mm: Mm) -> Self {
        Px(mm.to_pixels_f32().round() as i32)
    }
}

impl From<In> for Px {
    fn from(inches: In) -> Self {
        Px(inches.to_pixels_f32().round() as i32)
    }
}

impl From<In> for Mm {
    fn from(inches: In) -> Self {
        Mm(inches.0 * MM_PER_INCH)
    }
}

impl From<Mm> for In {
    fn from(mm: Mm) -> Self {
        In(mm.0 / MM_PER_INCH)
    }
}

/// Shorthand for any length that can be turned into pixels
pub fn px<L: Into<Px>>(length: L) -> i32 {
    length.into().0
}
