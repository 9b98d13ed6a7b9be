use glam::{Mat3, Vec3};

use crate::math::DEG_TO_RAD;
use crate::module::Module3D;

/// Rotates the input point around the origin before sampling the source.
///
/// Angles are in degrees. The rotation matrix is rebuilt whenever an angle
/// changes, never during evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatePoint<S> {
    source: S,
    angles: Vec3,
    matrix: Mat3,
}

impl<S> RotatePoint<S> {
    pub fn new(source: S) -> Self {
        Self::with_angles(source, 0.0, 0.0, 0.0)
    }

    pub fn with_angles(source: S, x: f32, y: f32, z: f32) -> Self {
        let angles = Vec3::new(x, y, z);
        Self {
            source,
            angles,
            matrix: rotation_matrix(angles),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Rotation around `(x, y, z)` in degrees.
    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    pub fn set_angles(&mut self, x: f32, y: f32, z: f32) {
        self.angles = Vec3::new(x, y, z);
        self.matrix = rotation_matrix(self.angles);
    }

    pub fn set_x_angle(&mut self, x: f32) {
        self.set_angles(x, self.angles.y, self.angles.z);
    }

    pub fn set_y_angle(&mut self, y: f32) {
        self.set_angles(self.angles.x, y, self.angles.z);
    }

    pub fn set_z_angle(&mut self, z: f32) {
        self.set_angles(self.angles.x, self.angles.y, z);
    }
}

fn rotation_matrix(angles: Vec3) -> Mat3 {
    let (xs, xc) = (libm::sinf(angles.x * DEG_TO_RAD), libm::cosf(angles.x * DEG_TO_RAD));
    let (ys, yc) = (libm::sinf(angles.y * DEG_TO_RAD), libm::cosf(angles.y * DEG_TO_RAD));
    let (zs, zc) = (libm::sinf(angles.z * DEG_TO_RAD), libm::cosf(angles.z * DEG_TO_RAD));

    // Built row by row; `matrix * p` dots each row with p.
    let row_x = Vec3::new(ys * xs * zs + yc * zc, xc * zs, ys * zc - yc * xs * zs);
    let row_y = Vec3::new(ys * xs * zc - yc * zs, xc * zc, -yc * xs * zc - ys * zs);
    let row_z = Vec3::new(-ys * xc, xs, yc * xc);
    Mat3::from_cols(row_x, row_y, row_z).transpose()
}

impl<S: Module3D> Module3D for RotatePoint<S> {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let p = self.matrix * Vec3::new(x, y, z);
        self.source.get_3d(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Perlin, Spheres};

    #[test]
    fn test_zero_angles_are_identity() {
        let perlin = Perlin::new();
        let rotated = RotatePoint::new(&perlin);
        assert_eq!(rotated.matrix, Mat3::IDENTITY);
        assert_eq!(rotated.get_3d(0.3, 0.7, -1.1), perlin.get_3d(0.3, 0.7, -1.1));
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let rotated = RotatePoint::with_angles(Spheres::with_frequency(0.9), 30.0, 45.0, 60.0);
        let reference = Spheres::with_frequency(0.9);
        for i in 0..50 {
            let t = i as f32 * 0.13;
            let a = rotated.get_3d(t, 0.5, -t);
            let b = reference.get_3d(t, 0.5, -t);
            assert!((a - b).abs() < 1e-3, "rotation changed radius at {t}: {a} vs {b}");
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let rotate = RotatePoint::with_angles(Spheres::new(), 0.0, 0.0, 90.0);
        let p = rotate.matrix * Vec3::X;
        assert!((p.length() - 1.0).abs() < 1e-6);
        assert!(p.x.abs() < 1e-6, "x axis should leave the x axis: {p}");
    }

    #[test]
    fn test_setter_rebuilds_matrix() {
        let mut rotate = RotatePoint::new(Spheres::new());
        rotate.set_y_angle(90.0);
        assert_eq!(rotate.angles(), Vec3::new(0.0, 90.0, 0.0));
        assert_ne!(rotate.matrix, Mat3::IDENTITY);
    }
}
