use vesta_noise::{CylinderModel, Module3D};

use super::plane::check_bounds;
use super::{Sweep, impl_builder_common};
use crate::error::MapError;
use crate::map::NoiseMap;

/// Builds a noise map from the surface of a unit cylinder around the y axis.
///
/// Columns sweep the angle (degrees), rows the height.
pub struct CylinderBuilder {
    sweep: Sweep,
    lower_angle: f32,
    upper_angle: f32,
    lower_height: f32,
    upper_height: f32,
}

impl CylinderBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            sweep: Sweep::new(width, height),
            lower_angle: -180.0,
            upper_angle: 180.0,
            lower_height: -10.0,
            upper_height: 10.0,
        }
    }

    /// `(lower_angle, upper_angle, lower_height, upper_height)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.lower_angle,
            self.upper_angle,
            self.lower_height,
            self.upper_height,
        )
    }

    pub fn set_bounds(
        &mut self,
        lower_angle: f32,
        upper_angle: f32,
        lower_height: f32,
        upper_height: f32,
    ) -> Result<(), MapError> {
        check_bounds(lower_angle, upper_angle)?;
        check_bounds(lower_height, upper_height)?;
        self.lower_angle = lower_angle;
        self.upper_angle = upper_angle;
        self.lower_height = lower_height;
        self.upper_height = upper_height;
        Ok(())
    }

    pub fn build_with_progress<M>(
        &self,
        source: &M,
        map: &mut NoiseMap,
        mut progress: impl FnMut(usize),
    ) -> Result<(), MapError>
    where
        M: Module3D + ?Sized,
    {
        let model = CylinderModel::new(source);
        let (width, height) = self.size();
        let angle_delta = (self.upper_angle - self.lower_angle) / width as f32;
        let height_delta = (self.upper_height - self.lower_height) / height as f32;

        self.sweep.run(map, &mut progress, |x, y| {
            let angle = self.lower_angle + x as f32 * angle_delta;
            let h = self.lower_height + y as f32 * height_delta;
            model.get_value(angle, h)
        })
    }
}

impl_builder_common!(CylinderBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use vesta_noise::Cylinders;

    #[test]
    fn test_unit_cylinder_is_uniform_for_coaxial_shells() {
        let builder = CylinderBuilder::new(12, 6);
        let mut map = NoiseMap::new();
        builder.build(&Cylinders::new(), &mut map).unwrap();

        let (min, max) = map.min_max().unwrap();
        assert!(
            (max - min).abs() < 1e-4,
            "expected a flat map, got range {min}..{max}"
        );
    }

    #[test]
    fn test_rows_follow_height() {
        struct Height;

        impl Module3D for Height {
            fn get_3d(&self, _x: f32, y: f32, _z: f32) -> f32 {
                y
            }
        }

        let builder = CylinderBuilder::new(2, 4);
        let mut map = NoiseMap::new();
        builder.build(&Height, &mut map).unwrap();
        assert_eq!(map.get(0, 0), -10.0);
        assert_eq!(map.get(1, 2), 0.0);
    }

    #[test]
    fn test_default_bounds() {
        assert_eq!(
            CylinderBuilder::new(1, 1).bounds(),
            (-180.0, 180.0, -10.0, 10.0)
        );
    }
}
