//! Configuration error types for the module graph.

use crate::fractal::MAX_OCTAVES;

/// Errors raised by configuration setters when a structural invariant would be violated.
///
/// Evaluation itself never fails; every invariant is checked at the mutating call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// A lower bound was not strictly below its upper bound.
    #[error("invalid bounds: lower bound {lower} must be less than upper bound {upper}")]
    InvalidBounds {
        /// Requested lower bound.
        lower: f32,
        /// Requested upper bound.
        upper: f32,
    },

    /// A control point with the same input value already exists.
    #[error("duplicate control point input {0}: each control point needs a unique input value")]
    DuplicateControlPoint(f32),

    /// A control point input was NaN or infinite.
    #[error("invalid control point input {0}: inputs must be finite")]
    InvalidControlPoint(f32),

    /// Fewer control points than the modifier needs.
    #[error("not enough control points: {required} required, {actual} given")]
    NotEnoughControlPoints {
        /// Minimum number of points the modifier accepts.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Octave count outside `1..=MAX_OCTAVES`.
    #[error("invalid octave count {0}: must be within 1..={max}", max = MAX_OCTAVES)]
    InvalidOctaveCount(f32),

    /// Unknown noise quality name or discriminant.
    #[error("invalid noise quality: {0}")]
    InvalidQuality(String),
}
