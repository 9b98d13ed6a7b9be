use crate::math::fast_floor;
use crate::module::Module3D;

/// Alternating unit cubes of `+1` and `-1`. Mostly useful for debugging graphs.
///
/// ```compile_fail
/// use vesta_noise::{Checkerboard, Module2D};
///
/// // Checkerboard only exists in 3D.
/// let board = Checkerboard::new();
/// let _ = board.get_2d(0.5, 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkerboard;

impl Checkerboard {
    pub fn new() -> Self {
        Self
    }
}

impl Module3D for Checkerboard {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let parity = (fast_floor(x) & 1) ^ (fast_floor(y) & 1) ^ (fast_floor(z) & 1);
        if parity != 0 { -1.0 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outputs_only_unit_values() {
        let board = Checkerboard::new();
        for i in -20..20 {
            let v = board.get_3d(i as f32 * 0.37, i as f32 * -0.61, i as f32 * 0.13);
            assert!(v == 1.0 || v == -1.0, "checkerboard produced {v}");
        }
    }

    #[test]
    fn test_adjacent_cells_alternate() {
        let board = Checkerboard::new();
        let a = board.get_3d(0.5, 0.5, 0.5);
        let b = board.get_3d(1.5, 0.5, 0.5);
        let c = board.get_3d(1.5, 1.5, 0.5);
        assert_eq!(a, -b);
        assert_eq!(a, c);
    }
}
