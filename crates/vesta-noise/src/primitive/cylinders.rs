use super::spheres::shell_value;
use crate::module::Module3D;

/// Concentric cylinders around the y axis.
///
/// Same profile as [`Spheres`](super::Spheres), measured in the xz plane only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinders {
    frequency: f32,
}

impl Cylinders {
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

impl Default for Cylinders {
    fn default() -> Self {
        Self::new()
    }
}

impl Module3D for Cylinders {
    fn get_3d(&self, x: f32, _y: f32, z: f32) -> f32 {
        let (x, z) = (x * self.frequency, z * self.frequency);
        shell_value(libm::sqrtf(x * x + z * z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_height() {
        let cylinders = Cylinders::new();
        let a = cylinders.get_3d(0.3, -10.0, 0.7);
        let b = cylinders.get_3d(0.3, 42.0, 0.7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_range() {
        let cylinders = Cylinders::with_frequency(0.7);
        for i in 0..200 {
            let t = i as f32 * 0.29 - 30.0;
            let v = cylinders.get_3d(t, 0.0, -t * 0.3);
            assert!((-1.0..=1.0).contains(&v), "cylinders out of range: {v}");
        }
    }
}
