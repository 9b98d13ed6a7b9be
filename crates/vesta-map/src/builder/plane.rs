use vesta_noise::math::lerp;
use vesta_noise::{Module3D, PlaneModel};

use super::{Sweep, impl_builder_common};
use crate::error::MapError;
use crate::map::NoiseMap;

/// Builds a noise map from a rectangle of the `y = 0` plane.
///
/// With `seamless` on, each sample is blended with the samples one full
/// extent away on both axes, so the map tiles without visible seams.
pub struct PlaneBuilder {
    sweep: Sweep,
    lower_x: f32,
    upper_x: f32,
    lower_z: f32,
    upper_z: f32,
    seamless: bool,
}

impl PlaneBuilder {
    /// A builder over `[-1, 1] x [-1, 1]`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            sweep: Sweep::new(width, height),
            lower_x: -1.0,
            upper_x: 1.0,
            lower_z: -1.0,
            upper_z: 1.0,
            seamless: false,
        }
    }

    /// `(lower_x, upper_x, lower_z, upper_z)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.lower_x, self.upper_x, self.lower_z, self.upper_z)
    }

    pub fn set_bounds(
        &mut self,
        lower_x: f32,
        upper_x: f32,
        lower_z: f32,
        upper_z: f32,
    ) -> Result<(), MapError> {
        check_bounds(lower_x, upper_x)?;
        check_bounds(lower_z, upper_z)?;
        self.lower_x = lower_x;
        self.upper_x = upper_x;
        self.lower_z = lower_z;
        self.upper_z = upper_z;
        Ok(())
    }

    pub fn seamless(&self) -> bool {
        self.seamless
    }

    pub fn set_seamless(&mut self, seamless: bool) {
        self.seamless = seamless;
    }

    /// Like [`build`](Self::build), calling `progress(row)` after each row.
    pub fn build_with_progress<M>(
        &self,
        source: &M,
        map: &mut NoiseMap,
        mut progress: impl FnMut(usize),
    ) -> Result<(), MapError>
    where
        M: Module3D + ?Sized,
    {
        let model = PlaneModel::new(source);
        let (width, height) = self.size();
        let x_extent = self.upper_x - self.lower_x;
        let z_extent = self.upper_z - self.lower_z;
        let x_delta = x_extent / width as f32;
        let z_delta = z_extent / height as f32;

        self.sweep.run(map, &mut progress, |x, z| {
            let x_cur = self.lower_x + x as f32 * x_delta;
            let z_cur = self.lower_z + z as f32 * z_delta;
            if !self.seamless {
                return model.get_value(x_cur, z_cur);
            }

            let sw = model.get_value(x_cur, z_cur);
            let se = model.get_value(x_cur + x_extent, z_cur);
            let nw = model.get_value(x_cur, z_cur + z_extent);
            let ne = model.get_value(x_cur + x_extent, z_cur + z_extent);
            let x_blend = 1.0 - (x_cur - self.lower_x) / x_extent;
            let z_blend = 1.0 - (z_cur - self.lower_z) / z_extent;
            let z0 = lerp(sw, se, x_blend);
            let z1 = lerp(nw, ne, x_blend);
            lerp(z0, z1, z_blend)
        })
    }
}

impl_builder_common!(PlaneBuilder);

pub(super) fn check_bounds(lower: f32, upper: f32) -> Result<(), MapError> {
    if !(lower < upper) {
        return Err(MapError::InvalidBounds { lower, upper });
    }
    Ok(())
}
