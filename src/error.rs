use crate::font::FontId;
use thiserror::Error;

/// All errors that the crate can generate. Rendering itself never fails; these
/// only come up while loading resources or setting up a [`Canvas`](crate::Canvas).
#[derive(Error, Debug)]
pub enum RasterError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to encode or decode an image
    Image(#[from] image::ImageError),

    #[error("font {0} is not registered with the shaper")]
    /// The theme refers to a font the shaper cannot render, so there is no fallback font
    UnknownFont(FontId),

    #[error("the canvas rectangle has no area")]
    /// The canvas was given a rectangle with zero width or height
    EmptyCanvas,
}
