//! Selectors route between two source modules using a third control module.

use crate::error::NoiseError;
use crate::math::{lerp, s_curve3};
use crate::module::{Module1D, Module2D, Module3D, Module4D};

/// Blends `left` into `right` by the control output: control `-1` gives
/// `left`, `1` gives `right`.
#[derive(Clone, Debug, PartialEq)]
pub struct Blend<L, R, C> {
    left: L,
    right: R,
    control: C,
}

impl<L, R, C> Blend<L, R, C> {
    pub fn new(left: L, right: R, control: C) -> Self {
        Self {
            left,
            right,
            control,
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    #[inline]
    fn blend(left: f32, right: f32, control: f32) -> f32 {
        lerp(left, right, (control + 1.0) * 0.5)
    }
}

impl<L: Module1D, R: Module1D, C: Module1D> Module1D for Blend<L, R, C> {
    fn get_1d(&self, x: f32) -> f32 {
        Self::blend(self.left.get_1d(x), self.right.get_1d(x), self.control.get_1d(x))
    }
}

impl<L: Module2D, R: Module2D, C: Module2D> Module2D for Blend<L, R, C> {
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        Self::blend(
            self.left.get_2d(x, y),
            self.right.get_2d(x, y),
            self.control.get_2d(x, y),
        )
    }
}

impl<L: Module3D, R: Module3D, C: Module3D> Module3D for Blend<L, R, C> {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        Self::blend(
            self.left.get_3d(x, y, z),
            self.right.get_3d(x, y, z),
            self.control.get_3d(x, y, z),
        )
    }
}

impl<L: Module4D, R: Module4D, C: Module4D> Module4D for Blend<L, R, C> {
    fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
        Self::blend(
            self.left.get_4d(x, y, z, t),
            self.right.get_4d(x, y, z, t),
            self.control.get_4d(x, y, z, t),
        )
    }
}

/// Picks `inside` where the control output lies within `[lower, upper]` and
/// `outside` everywhere else.
///
/// A non-zero edge falloff smooths each boundary over
/// `[bound - falloff, bound + falloff]` with a cubic S-curve. The falloff is
/// clamped to half the bound range so the two transition bands never overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct Select<A, B, C> {
    outside: A,
    inside: B,
    control: C,
    lower: f32,
    upper: f32,
    falloff: f32,
}

impl<A, B, C> Select<A, B, C> {
    pub const DEFAULT_LOWER_BOUND: f32 = -1.0;
    pub const DEFAULT_UPPER_BOUND: f32 = 1.0;
    pub const DEFAULT_FALLOFF: f32 = 0.0;

    pub fn new(outside: A, inside: B, control: C) -> Self {
        Self {
            outside,
            inside,
            control,
            lower: Self::DEFAULT_LOWER_BOUND,
            upper: Self::DEFAULT_UPPER_BOUND,
            falloff: Self::DEFAULT_FALLOFF,
        }
    }

    pub fn outside(&self) -> &A {
        &self.outside
    }

    pub fn inside(&self) -> &B {
        &self.inside
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }

    /// Sets the selection range and re-clamps the falloff to fit it.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidBounds`] unless `lower < upper`.
    pub fn set_bounds(&mut self, lower: f32, upper: f32) -> Result<(), NoiseError> {
        if !(lower < upper) {
            return Err(NoiseError::InvalidBounds { lower, upper });
        }
        self.lower = lower;
        self.upper = upper;
        self.set_falloff(self.falloff);
        Ok(())
    }

    pub fn falloff(&self) -> f32 {
        self.falloff
    }

    /// Clamped into `[0, (upper - lower) / 2]`.
    pub fn set_falloff(&mut self, falloff: f32) {
        let half_range = (self.upper - self.lower) * 0.5;
        self.falloff = falloff.clamp(0.0, half_range);
    }

    fn select(&self, control: f32, outside: impl Fn() -> f32, inside: impl Fn() -> f32) -> f32 {
        let (lower, upper, falloff) = (self.lower, self.upper, self.falloff);

        if falloff > 0.0 {
            if control < lower - falloff {
                outside()
            } else if control < lower + falloff {
                let alpha = s_curve3((control - (lower - falloff)) / (2.0 * falloff));
                lerp(outside(), inside(), alpha)
            } else if control < upper - falloff {
                inside()
            } else if control < upper + falloff {
                let alpha = s_curve3((control - (upper - falloff)) / (2.0 * falloff));
                lerp(inside(), outside(), alpha)
            } else {
                outside()
            }
        } else if control < lower || control > upper {
            outside()
        } else {
            inside()
        }
    }
}

impl<A: Module1D, B: Module1D, C: Module1D> Module1D for Select<A, B, C> {
    fn get_1d(&self, x: f32) -> f32 {
        self.select(
            self.control.get_1d(x),
            || self.outside.get_1d(x),
            || self.inside.get_1d(x),
        )
    }
}

impl<A: Module2D, B: Module2D, C: Module2D> Module2D for Select<A, B, C> {
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        self.select(
            self.control.get_2d(x, y),
            || self.outside.get_2d(x, y),
            || self.inside.get_2d(x, y),
        )
    }
}

impl<A: Module3D, B: Module3D, C: Module3D> Module3D for Select<A, B, C> {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.select(
            self.control.get_3d(x, y, z),
            || self.outside.get_3d(x, y, z),
            || self.inside.get_3d(x, y, z),
        )
    }
}

impl<A: Module4D, B: Module4D, C: Module4D> Module4D for Select<A, B, C> {
    fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
        self.select(
            self.control.get_4d(x, y, z, t),
            || self.outside.get_4d(x, y, z, t),
            || self.inside.get_4d(x, y, z, t),
        )
    }
}
