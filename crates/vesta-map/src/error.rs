//! Errors raised while building, rendering or writing maps.

use vesta_noise::NoiseError;

/// Errors produced by map builders, renderers and writers.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A lower bound was not strictly below its upper bound.
    #[error("invalid bounds: lower bound {lower} must be less than upper bound {upper}")]
    InvalidBounds {
        /// Requested lower bound.
        lower: f32,
        /// Requested upper bound.
        upper: f32,
    },

    /// The requested map size cannot be allocated.
    #[error("invalid map size {width}x{height}")]
    InvalidSize {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// A color gradient needs at least two points before it can render.
    #[error("not enough gradient points: 2 required, {0} given")]
    NotEnoughGradientPoints(usize),

    /// A gradient point already exists at this position.
    #[error("duplicate gradient point at position {0}")]
    DuplicateGradientPoint(f32),

    /// The source map has no cells.
    #[error("cannot render an empty map")]
    EmptyMap,

    /// Filesystem error while writing output.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// A module configuration error surfaced while preparing a build.
    #[error(transparent)]
    Noise(#[from] NoiseError),
}
