use crate::error::NoiseError;
use crate::math;

use super::impl_output_modifier;

/// Clamps the source output into `[lower, upper]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Clamp<S> {
    source: S,
    lower: f32,
    upper: f32,
}

impl<S> Clamp<S> {
    pub const DEFAULT_LOWER_BOUND: f32 = -1.0;
    pub const DEFAULT_UPPER_BOUND: f32 = 1.0;

    /// Clamp to `[-1, 1]`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            lower: Self::DEFAULT_LOWER_BOUND,
            upper: Self::DEFAULT_UPPER_BOUND,
        }
    }

    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidBounds`] unless `lower < upper`.
    pub fn with_bounds(source: S, lower: f32, upper: f32) -> Result<Self, NoiseError> {
        let mut clamp = Self::new(source);
        clamp.set_bounds(lower, upper)?;
        Ok(clamp)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn lower_bound(&self) -> f32 {
        self.lower
    }

    pub fn upper_bound(&self) -> f32 {
        self.upper
    }

    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidBounds`] unless `lower < upper`; the
    /// current bounds are left unchanged.
    pub fn set_bounds(&mut self, lower: f32, upper: f32) -> Result<(), NoiseError> {
        // Written so that NaN bounds are rejected too.
        if !(lower < upper) {
            return Err(NoiseError::InvalidBounds { lower, upper });
        }
        self.lower = lower;
        self.upper = upper;
        Ok(())
    }
}

impl_output_modifier!(Clamp, |this, value| math::clamp(value, this.lower, this.upper));
