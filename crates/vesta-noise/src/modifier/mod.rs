//! Single-input modifiers that remap a source module's output value.

mod clamp;
mod control_point;
mod curve;
mod exponent;
mod simple;
mod terrace;

pub use clamp::Clamp;
pub use control_point::ControlPoint;
pub use curve::Curve;
pub use exponent::Exponent;
pub use simple::{Abs, Invert, ScaleBias};
pub use terrace::Terrace;

/// Implements every dimension for a modifier whose `source` output is passed
/// through `$map(self, value)`.
macro_rules! impl_output_modifier {
    ($ty:ident, |$this:ident, $value:ident| $map:expr) => {
        impl<S: $crate::module::Module1D> $crate::module::Module1D for $ty<S> {
            fn get_1d(&self, x: f32) -> f32 {
                let $this = self;
                let $value = self.source.get_1d(x);
                $map
            }
        }

        impl<S: $crate::module::Module2D> $crate::module::Module2D for $ty<S> {
            fn get_2d(&self, x: f32, y: f32) -> f32 {
                let $this = self;
                let $value = self.source.get_2d(x, y);
                $map
            }
        }

        impl<S: $crate::module::Module3D> $crate::module::Module3D for $ty<S> {
            fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
                let $this = self;
                let $value = self.source.get_3d(x, y, z);
                $map
            }
        }

        impl<S: $crate::module::Module4D> $crate::module::Module4D for $ty<S> {
            fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
                let $this = self;
                let $value = self.source.get_4d(x, y, z, t);
                $map
            }
        }
    };
}

pub(crate) use impl_output_modifier;
