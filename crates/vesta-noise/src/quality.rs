//! Interpolation quality for lattice noise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::math::{s_curve3, s_curve5};

/// How lattice primitives blend between neighbouring cells.
///
/// Affects only the shape of the interpolation inside a cell; the values at
/// lattice points are the same for every quality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseQuality {
    /// Linear blend. Visible creases at cell boundaries.
    Fast,
    /// Cubic S-curve blend.
    #[default]
    Standard,
    /// Quintic S-curve blend. Smooth second derivative.
    Best,
}

impl NoiseQuality {
    /// Apply this quality's easing curve to a fractional cell offset in `[0, 1]`.
    #[inline]
    pub fn s_curve(self, a: f32) -> f32 {
        match self {
            Self::Fast => a,
            Self::Standard => s_curve3(a),
            Self::Best => s_curve5(a),
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Standard => "standard",
            Self::Best => "best",
        }
    }
}

impl fmt::Display for NoiseQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseQuality {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "standard" => Ok(Self::Standard),
            "best" => Ok(Self::Best),
            _ => Err(NoiseError::InvalidQuality(s.to_string())),
        }
    }
}

impl TryFrom<u8> for NoiseQuality {
    type Error = NoiseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fast),
            1 => Ok(Self::Standard),
            2 => Ok(Self::Best),
            other => Err(NoiseError::InvalidQuality(other.to_string())),
        }
    }
}
