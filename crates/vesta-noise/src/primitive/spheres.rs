use crate::math::fast_floor;
use crate::module::Module3D;

/// Concentric spherical shells centred on the origin.
///
/// Outputs `1` on every shell (radius `n / frequency`) and `-1` halfway between shells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spheres {
    frequency: f32,
}

impl Spheres {
    pub const DEFAULT_FREQUENCY: f32 = 1.0;

    pub fn new() -> Self {
        Self::with_frequency(Self::DEFAULT_FREQUENCY)
    }

    pub fn with_frequency(frequency: f32) -> Self {
        Self { frequency }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }
}

impl Default for Spheres {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a radial distance onto the shell profile shared by spheres and cylinders.
pub(super) fn shell_value(distance: f32) -> f32 {
    let inner = distance - fast_floor(distance) as f32;
    let outer = 1.0 - inner;
    1.0 - inner.min(outer) * 4.0
}

impl Module3D for Spheres {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let (x, y, z) = (x * self.frequency, y * self.frequency, z * self.frequency);
        shell_value(libm::sqrtf(x * x + y * y + z * z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_and_midpoint() {
        let spheres = Spheres::new();
        assert!((spheres.get_3d(1.0, 0.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((spheres.get_3d(0.0, 1.5, 0.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_range() {
        let spheres = Spheres::with_frequency(2.3);
        for i in 0..200 {
            let t = i as f32 * 0.173;
            let v = spheres.get_3d(t, -t * 0.5, t * 0.25);
            assert!((-1.0..=1.0).contains(&v), "spheres out of range: {v}");
        }
    }

    #[test]
    fn test_frequency_scales_radius() {
        let spheres = Spheres::with_frequency(2.0);
        assert!((spheres.get_3d(0.5, 0.0, 0.0) - 1.0).abs() < 1e-6);
    }
}
