//! Coordinate models: project a simple surface parameterisation into the 3D
//! input space of a module graph.

use glam::Vec3;

use crate::math::{DEG_TO_RAD, lat_lon_to_xyz};
use crate::module::Module3D;

/// The `y = 0` plane: `(x, z)` samples the source at `(x, 0, z)`.
#[derive(Clone, Debug)]
pub struct PlaneModel<S> {
    source: S,
}

impl<S: Module3D> PlaneModel<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_value(&self, x: f32, z: f32) -> f32 {
        self.source.get_3d(x, 0.0, z)
    }
}

/// The unit sphere, addressed by latitude and longitude in degrees.
#[derive(Clone, Debug)]
pub struct SphereModel<S> {
    source: S,
}

impl<S: Module3D> SphereModel<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Latitude in `[-90, 90]`, longitude in `[-180, 180]`.
    pub fn get_value(&self, lat: f32, lon: f32) -> f32 {
        let p = lat_lon_to_xyz(lat, lon);
        self.source.get_3d(p.x, p.y, p.z)
    }
}

/// A unit-radius cylinder around the y axis, addressed by angle (degrees)
/// and height.
#[derive(Clone, Debug)]
pub struct CylinderModel<S> {
    source: S,
}

impl<S: Module3D> CylinderModel<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_value(&self, angle: f32, height: f32) -> f32 {
        let radians = angle * DEG_TO_RAD;
        self.source
            .get_3d(libm::cosf(radians), height, libm::sinf(radians))
    }
}

/// A segment between two points, addressed by `p` in `[0, 1]`.
///
/// With attenuation on (the default) the output is scaled by `4p(1 - p)`, so
/// it fades to zero at both ends.
#[derive(Clone, Debug)]
pub struct LineModel<S> {
    source: S,
    start: Vec3,
    end: Vec3,
    attenuate: bool,
}

impl<S: Module3D> LineModel<S> {
    /// Line from the origin to `(1, 1, 1)`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            start: Vec3::ZERO,
            end: Vec3::ONE,
            attenuate: true,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn set_start(&mut self, start: Vec3) {
        self.start = start;
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn set_end(&mut self, end: Vec3) {
        self.end = end;
    }

    pub fn attenuate(&self) -> bool {
        self.attenuate
    }

    pub fn set_attenuate(&mut self, attenuate: bool) {
        self.attenuate = attenuate;
    }

    pub fn get_value(&self, p: f32) -> f32 {
        let point = self.start + (self.end - self.start) * p;
        let value = self.source.get_3d(point.x, point.y, point.z);
        if self.attenuate {
            p * (1.0 - p) * 4.0 * value
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Constant, Cylinders, Spheres};

    #[test]
    fn test_plane_samples_y_zero() {
        struct Height;
        impl Module3D for Height {
            fn get_3d(&self, _x: f32, y: f32, _z: f32) -> f32 {
                y
            }
        }
        let plane = PlaneModel::new(Height);
        assert_eq!(plane.get_value(3.0, -2.0), 0.0);
    }

    #[test]
    fn test_sphere_model_lies_on_unit_sphere() {
        // Unit shells output 1 everywhere on the unit sphere.
        let sphere = SphereModel::new(Spheres::new());
        for lat in [-60.0, 0.0, 45.0] {
            for lon in [-170.0, 0.0, 90.0] {
                let v = sphere.get_value(lat, lon);
                assert!((v - 1.0).abs() < 1e-4, "({lat}, {lon}) -> {v}");
            }
        }
    }

    #[test]
    fn test_cylinder_model_has_unit_radius() {
        let cylinder = CylinderModel::new(Cylinders::new());
        for angle in [0.0, 33.0, 180.0, 270.0] {
            let v = cylinder.get_value(angle, 5.0);
            assert!((v - 1.0).abs() < 1e-4, "angle {angle} -> {v}");
        }
    }

    #[test]
    fn test_line_attenuation() {
        let mut line = LineModel::new(Constant::new(1.0));
        assert_eq!(line.get_value(0.0), 0.0);
        assert_eq!(line.get_value(1.0), 0.0);
        assert_eq!(line.get_value(0.5), 1.0);

        line.set_attenuate(false);
        assert_eq!(line.get_value(0.0), 1.0);
    }

    #[test]
    fn test_line_interpolates_endpoints() {
        struct X;
        impl Module3D for X {
            fn get_3d(&self, x: f32, _y: f32, _z: f32) -> f32 {
                x
            }
        }
        let mut line = LineModel::new(X);
        line.set_attenuate(false);
        line.set_start(Vec3::new(2.0, 0.0, 0.0));
        line.set_end(Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(line.get_value(0.5), 3.0);
    }
}
