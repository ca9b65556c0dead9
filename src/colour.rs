/// A colour, expressed in RGB, CMYK or grey colour spaces. All surfaces are RGBA,
/// so every colour is converted with [`Colour::to_rgba8`] when it is drawn.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }

    /// Convert to fully opaque 8-bit RGBA. CMYK is converted naively, without any
    /// colour profile.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let (r, g, b) = match *self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::CMYK { c, m, y, k } => (
                (1.0 - c) * (1.0 - k),
                (1.0 - m) * (1.0 - k),
                (1.0 - y) * (1.0 - k),
            ),
            Colour::Grey { g } => (g, g, g),
        };
        [to_byte(r), to_byte(g), to_byte(b), 255]
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<(f32, f32, f32)> for Colour {
    fn from(c: (f32, f32, f32)) -> Self {
        Colour::RGB {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(c: image::Rgba<u8>) -> Self {
        let [r, g, b, _] = c.0;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba(c.to_rgba8())
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_spaces_convert_to_rgba() {
        assert_eq!(colours::BLACK.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(colours::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Colour::new_cmyk(0.0, 1.0, 1.0, 0.0).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Colour::new_rgb_bytes(198, 46, 46).to_rgba8(), [198, 46, 46, 255]);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(Colour::new_rgb(2.0, -1.0, 0.5).to_rgba8(), [255, 0, 128, 255]);
    }
}
