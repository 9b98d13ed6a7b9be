//! Two-input arithmetic combinators.
//!
//! Both children are always evaluated, including for `Min` and `Max`.

use crate::module::{Module1D, Module2D, Module3D, Module4D};

macro_rules! combiner {
    ($(#[$doc:meta])* $name:ident, |$a:ident, $b:ident| $op:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name<L, R> {
            left: L,
            right: R,
        }

        impl<L, R> $name<L, R> {
            pub fn new(left: L, right: R) -> Self {
                Self { left, right }
            }

            pub fn left(&self) -> &L {
                &self.left
            }

            pub fn right(&self) -> &R {
                &self.right
            }

            pub fn set_left(&mut self, left: L) {
                self.left = left;
            }

            pub fn set_right(&mut self, right: R) {
                self.right = right;
            }

            #[inline]
            fn combine($a: f32, $b: f32) -> f32 {
                $op
            }
        }

        impl<L: Module1D, R: Module1D> Module1D for $name<L, R> {
            fn get_1d(&self, x: f32) -> f32 {
                Self::combine(self.left.get_1d(x), self.right.get_1d(x))
            }
        }

        impl<L: Module2D, R: Module2D> Module2D for $name<L, R> {
            fn get_2d(&self, x: f32, y: f32) -> f32 {
                Self::combine(self.left.get_2d(x, y), self.right.get_2d(x, y))
            }
        }

        impl<L: Module3D, R: Module3D> Module3D for $name<L, R> {
            fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
                Self::combine(self.left.get_3d(x, y, z), self.right.get_3d(x, y, z))
            }
        }

        impl<L: Module4D, R: Module4D> Module4D for $name<L, R> {
            fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
                Self::combine(self.left.get_4d(x, y, z, t), self.right.get_4d(x, y, z, t))
            }
        }
    };
}

combiner!(
    /// `left + right`
    Add, |a, b| a + b
);
combiner!(
    /// `left - right`
    Subtract, |a, b| a - b
);
combiner!(
    /// `left * right`
    Multiply, |a, b| a * b
);
combiner!(
    /// Smaller of the two outputs.
    Min, |a, b| a.min(b)
);
combiner!(
    /// Larger of the two outputs.
    Max, |a, b| a.max(b)
);
combiner!(
    /// `left` raised to the power of `right`.
    Power, |a, b| libm::powf(a, b)
);
