//! Dimensional capability traits.
//!
//! A noise module is any value that can be sampled at a point. Each dimensionality
//! is a separate trait so that a module only claims the dimensions it really
//! supports: composites are generic over their children and implement a trait
//! only when every child implements it. Asking a 3D-only graph for a 2D value is
//! therefore a compile error rather than a runtime failure.
//!
//! Evaluation takes `&self`, so a finished graph can be shared between threads
//! (`Arc<M>` implements every trait `M` does).

use std::sync::Arc;

/// A module that can be evaluated on a line.
pub trait Module1D: Send + Sync {
    /// Sample the module at `x`.
    fn get_1d(&self, x: f32) -> f32;
}

/// A module that can be evaluated on a plane.
pub trait Module2D: Send + Sync {
    /// Sample the module at `(x, y)`.
    fn get_2d(&self, x: f32, y: f32) -> f32;
}

/// A module that can be evaluated in space.
pub trait Module3D: Send + Sync {
    /// Sample the module at `(x, y, z)`.
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32;
}

/// A module that can be evaluated in four dimensions.
pub trait Module4D: Send + Sync {
    /// Sample the module at `(x, y, z, t)`.
    fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32;
}

macro_rules! impl_pointer_modules {
    ($($ptr:ty),+) => {
        $(
            impl<M: Module1D + ?Sized> Module1D for $ptr {
                #[inline]
                fn get_1d(&self, x: f32) -> f32 {
                    (**self).get_1d(x)
                }
            }

            impl<M: Module2D + ?Sized> Module2D for $ptr {
                #[inline]
                fn get_2d(&self, x: f32, y: f32) -> f32 {
                    (**self).get_2d(x, y)
                }
            }

            impl<M: Module3D + ?Sized> Module3D for $ptr {
                #[inline]
                fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
                    (**self).get_3d(x, y, z)
                }
            }

            impl<M: Module4D + ?Sized> Module4D for $ptr {
                #[inline]
                fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
                    (**self).get_4d(x, y, z, t)
                }
            }
        )+
    };
}

// Borrowed children, owned boxes (including `Box<dyn Module3D>`), and shared subgraphs.
impl_pointer_modules!(&M, Box<M>, Arc<M>);
