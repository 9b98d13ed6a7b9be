//! Noise map builders.
//!
//! A builder sweeps a coordinate model (plane, sphere or cylinder) over a
//! rectangular region and writes one evaluated sample per cell of a
//! [`NoiseMap`]. Rows are produced bottom-up in model space: row 0 holds the
//! lowest z / latitude / height.
//!
//! An optional [`BuilderFilter`] can mask the output cell by cell; its level
//! is computed once per cell, before the source is sampled, so cells at
//! [`FilterLevel::Constant`] never evaluate the module graph.

mod cylinder;
mod plane;
mod shape;
mod sphere;

pub use cylinder::CylinderBuilder;
pub use plane::PlaneBuilder;
pub use shape::ShapeFilter;
pub use sphere::SphereBuilder;

use tracing::debug;
use vesta_noise::math::lerp;

use crate::error::MapError;
use crate::map::NoiseMap;

/// What a [`BuilderFilter`] wants for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterLevel {
    /// Write the filter's constant value; the source is not sampled.
    Constant,
    /// Write the source value unchanged.
    Source,
    /// Blend from the constant (`0.0`) to the source (`1.0`).
    Filter(f32),
}

/// Per-cell mask applied while a builder fills a map.
pub trait BuilderFilter: Send + Sync {
    /// Value written for cells at [`FilterLevel::Constant`].
    fn constant_value(&self) -> f32;

    /// Level for the cell at column `x`, row `y`.
    fn level(&self, x: usize, y: usize) -> FilterLevel;
}

/// Map size and filter shared by every builder.
#[derive(Default)]
pub(crate) struct Sweep {
    width: usize,
    height: usize,
    filter: Option<Box<dyn BuilderFilter>>,
}

impl Sweep {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            filter: None,
        }
    }

    /// Resize `map` and fill it with `sample(x, y)`, honouring the filter.
    pub(crate) fn run(
        &self,
        map: &mut NoiseMap,
        progress: &mut dyn FnMut(usize),
        mut sample: impl FnMut(usize, usize) -> f32,
    ) -> Result<(), MapError> {
        map.set_size(self.width, self.height)?;
        if map.is_empty() {
            return Ok(());
        }

        debug!(width = self.width, height = self.height, "Building noise map");

        let filter = self.filter.as_deref();
        for (y, row) in map.data_mut().chunks_exact_mut(self.width).enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = match filter.map(|f| (f, f.level(x, y))) {
                    None | Some((_, FilterLevel::Source)) => sample(x, y),
                    Some((f, FilterLevel::Constant)) => f.constant_value(),
                    Some((f, FilterLevel::Filter(weight))) => {
                        lerp(f.constant_value(), sample(x, y), weight)
                    }
                };
            }
            progress(y);
        }

        debug!("Noise map complete");
        Ok(())
    }
}

/// Size, filter and `build` methods shared by the builders.
macro_rules! impl_builder_common {
    ($ty:ty) => {
        impl $ty {
            /// `(width, height)` of the maps this builder produces.
            pub fn size(&self) -> (usize, usize) {
                (self.sweep.width, self.sweep.height)
            }

            pub fn set_size(&mut self, width: usize, height: usize) {
                self.sweep.width = width;
                self.sweep.height = height;
            }

            /// Mask subsequent builds with `filter`.
            pub fn set_filter(&mut self, filter: impl $crate::builder::BuilderFilter + 'static) {
                self.sweep.filter = Some(Box::new(filter));
            }

            pub fn clear_filter(&mut self) {
                self.sweep.filter = None;
            }

            pub fn has_filter(&self) -> bool {
                self.sweep.filter.is_some()
            }

            /// Fill `map` from `source`, resizing it to this builder's size.
            pub fn build<M>(
                &self,
                source: &M,
                map: &mut $crate::map::NoiseMap,
            ) -> Result<(), $crate::error::MapError>
            where
                M: vesta_noise::Module3D + ?Sized,
            {
                self.build_with_progress(source, map, |_| {})
            }
        }
    };
}

pub(crate) use impl_builder_common;
