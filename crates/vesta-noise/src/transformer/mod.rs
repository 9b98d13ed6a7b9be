//! Transformers warp the input point before sampling their source.

mod displace;
mod rotate;
mod scale;
mod translate;
mod turbulence;

pub use displace::Displace;
pub use rotate::RotatePoint;
pub use scale::ScalePoint;
pub use translate::TranslatePoint;
pub use turbulence::{PerlinDistortion, Turbulence};

/// Per-axis transform shared by [`TranslatePoint`] and [`ScalePoint`]: each
/// axis has its own constant and `$op` applies it to the coordinate.
macro_rules! impl_axis_transformer {
    ($ty:ident, $op:tt) => {
        impl<S: $crate::module::Module1D> $crate::module::Module1D for $ty<S> {
            fn get_1d(&self, x: f32) -> f32 {
                self.source.get_1d(x $op self.x)
            }
        }

        impl<S: $crate::module::Module2D> $crate::module::Module2D for $ty<S> {
            fn get_2d(&self, x: f32, y: f32) -> f32 {
                self.source.get_2d(x $op self.x, y $op self.y)
            }
        }

        impl<S: $crate::module::Module3D> $crate::module::Module3D for $ty<S> {
            fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
                self.source.get_3d(x $op self.x, y $op self.y, z $op self.z)
            }
        }

        impl<S: $crate::module::Module4D> $crate::module::Module4D for $ty<S> {
            fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
                self.source
                    .get_4d(x $op self.x, y $op self.y, z $op self.z, t $op self.t)
            }
        }
    };
}

pub(crate) use impl_axis_transformer;
