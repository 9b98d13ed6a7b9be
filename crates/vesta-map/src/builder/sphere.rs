use vesta_noise::{Module3D, SphereModel};

use super::plane::check_bounds;
use super::{Sweep, impl_builder_common};
use crate::error::MapError;
use crate::map::NoiseMap;

/// Builds a latitude/longitude noise map from the unit sphere.
///
/// Columns run west to east, rows south to north. The default bounds cover
/// the whole sphere, which suits equirectangular textures.
pub struct SphereBuilder {
    sweep: Sweep,
    south: f32,
    north: f32,
    west: f32,
    east: f32,
}

impl SphereBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            sweep: Sweep::new(width, height),
            south: -90.0,
            north: 90.0,
            west: -180.0,
            east: 180.0,
        }
    }

    /// `(south, north, west, east)` in degrees.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.south, self.north, self.west, self.east)
    }

    pub fn set_bounds(
        &mut self,
        south: f32,
        north: f32,
        west: f32,
        east: f32,
    ) -> Result<(), MapError> {
        check_bounds(south, north)?;
        check_bounds(west, east)?;
        self.south = south;
        self.north = north;
        self.west = west;
        self.east = east;
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
        let model = SphereModel::new(source);
        let (width, height) = self.size();
        let lon_delta = (self.east - self.west) / width as f32;
        let lat_delta = (self.north - self.south) / height as f32;

        self.sweep.run(map, &mut progress, |x, y| {
            let lat = self.south + y as f32 * lat_delta;
            let lon = self.west + x as f32 * lon_delta;
            model.get_value(lat, lon)
        })
    }
}

impl_builder_common!(SphereBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use vesta_noise::Spheres;

    #[test]
    fn test_unit_sphere_is_uniform_for_concentric_shells() {
        // Every point of the unit sphere sits at distance 1 from the origin,
        // so concentric shells give the same value everywhere.
        let builder = SphereBuilder::new(16, 8);
        let mut map = NoiseMap::new();
        builder.build(&Spheres::new(), &mut map).unwrap();

        let (min, max) = map.min_max().unwrap();
        assert!(
            (max - min).abs() < 1e-4,
            "expected a flat map, got range {min}..{max}"
        );
    }

    #[test]
    fn test_first_row_is_south() {
        struct Height;

        impl Module3D for Height {
            fn get_3d(&self, _x: f32, y: f32, _z: f32) -> f32 {
                y
            }
        }

        let builder = SphereBuilder::new(4, 4);
        let mut map = NoiseMap::new();
        builder.build(&Height, &mut map).unwrap();
        assert!((map.get(0, 0) + 1.0).abs() < 1e-6);
        assert!(map.get(0, 3) > map.get(0, 1));
    }

    #[test]
    fn test_bounds_validation() {
        let mut builder = SphereBuilder::new(4, 4);
        assert!(builder.set_bounds(10.0, -10.0, -180.0, 180.0).is_err());
        assert!(builder.set_bounds(-45.0, 45.0, 0.0, 90.0).is_ok());
        assert_eq!(builder.bounds(), (-45.0, 45.0, 0.0, 90.0));
    }
}
