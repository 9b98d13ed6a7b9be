//! Lattice value noise.
//!
//! Each lattice point gets a pseudo-random value in `[-1, 1]` from an integer
//! hash of its coordinates and the seed; points between lattice nodes are
//! interpolated with the quality's S-curve.

use crate::math::{clamp01, fast_floor, lerp};
use crate::module::{Module1D, Module2D, Module3D};
use crate::quality::NoiseQuality;

use super::DEFAULT_SEED;

const X_NOISE_GEN: i32 = 1619;
const Y_NOISE_GEN: i32 = 31337;
const Z_NOISE_GEN: i32 = 6971;
const SEED_NOISE_GEN: i64 = 1013;

// All multipliers are prime; the lattice term wraps at 32 bits, the seed term at 64.
#[inline]
fn int_value_noise(lattice: i32, seed: i64) -> i32 {
    let mut n = i64::from(lattice).wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed)) & 0x7fff_ffff;
    n ^= n >> 13;
    let mixed = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589);
    (mixed as i32) & 0x7fff_ffff
}

/// Offset of `coord` inside its lattice cell, kept in `[0, 1]` even when the
/// cell index saturated.
#[inline]
fn cell_offset(coord: f32, cell: i32) -> f32 {
    clamp01(coord - cell as f32)
}

#[inline]
fn to_unit(n: i32) -> f32 {
    1.0 - n as f32 / 1_073_741_824.0
}

/// Value at integer lattice point `x`, in `[-1, 1]`.
pub fn value_noise_1d(x: i32, seed: i64) -> f32 {
    to_unit(int_value_noise(X_NOISE_GEN.wrapping_mul(x), seed))
}

/// Value at integer lattice point `(x, y)`, in `[-1, 1]`.
pub fn value_noise_2d(x: i32, y: i32, seed: i64) -> f32 {
    let lattice = X_NOISE_GEN
        .wrapping_mul(x)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(y));
    to_unit(int_value_noise(lattice, seed))
}

/// Value at integer lattice point `(x, y, z)`, in `[-1, 1]`.
pub fn value_noise_3d(x: i32, y: i32, z: i32, seed: i64) -> f32 {
    let lattice = X_NOISE_GEN
        .wrapping_mul(x)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(y))
        .wrapping_add(Z_NOISE_GEN.wrapping_mul(z));
    to_unit(int_value_noise(lattice, seed))
}

/// Interpolated value noise on a line.
pub fn value_coherent_noise_1d(x: f32, seed: i64, quality: NoiseQuality) -> f32 {
    let x0 = fast_floor(x);
    let xs = quality.s_curve(cell_offset(x, x0));
    lerp(
        value_noise_1d(x0, seed),
        value_noise_1d(x0.wrapping_add(1), seed),
        xs,
    )
}

/// Interpolated value noise on a plane.
pub fn value_coherent_noise_2d(x: f32, y: f32, seed: i64, quality: NoiseQuality) -> f32 {
    let (x0, y0) = (fast_floor(x), fast_floor(y));
    let (x1, y1) = (x0.wrapping_add(1), y0.wrapping_add(1));
    let xs = quality.s_curve(cell_offset(x, x0));
    let ys = quality.s_curve(cell_offset(y, y0));

    let ix0 = lerp(value_noise_2d(x0, y0, seed), value_noise_2d(x1, y0, seed), xs);
    let ix1 = lerp(value_noise_2d(x0, y1, seed), value_noise_2d(x1, y1, seed), xs);
    lerp(ix0, ix1, ys)
}

/// Interpolated value noise in space (trilinear over the S-curved offsets).
pub fn value_coherent_noise_3d(x: f32, y: f32, z: f32, seed: i64, quality: NoiseQuality) -> f32 {
    let (x0, y0, z0) = (fast_floor(x), fast_floor(y), fast_floor(z));
    let (x1, y1, z1) = (x0.wrapping_add(1), y0.wrapping_add(1), z0.wrapping_add(1));
    let xs = quality.s_curve(cell_offset(x, x0));
    let ys = quality.s_curve(cell_offset(y, y0));
    let zs = quality.s_curve(cell_offset(z, z0));

    let ix0 = lerp(value_noise_3d(x0, y0, z0, seed), value_noise_3d(x1, y0, z0, seed), xs);
    let ix1 = lerp(value_noise_3d(x0, y1, z0, seed), value_noise_3d(x1, y1, z0, seed), xs);
    let iy0 = lerp(ix0, ix1, ys);

    let ix0 = lerp(value_noise_3d(x0, y0, z1, seed), value_noise_3d(x1, y0, z1, seed), xs);
    let ix1 = lerp(value_noise_3d(x0, y1, z1, seed), value_noise_3d(x1, y1, z1, seed), xs);
    let iy1 = lerp(ix0, ix1, ys);

    lerp(iy0, iy1, zs)
}

/// Value noise primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Value {
    seed: i32,
    quality: NoiseQuality,
}

impl Value {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED, NoiseQuality::default())
    }

    pub fn with_seed(seed: i32, quality: NoiseQuality) -> Self {
        Self { seed, quality }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    pub fn quality(&self) -> NoiseQuality {
        self.quality
    }

    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.quality = quality;
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::new()
    }
}

impl Module1D for Value {
    fn get_1d(&self, x: f32) -> f32 {
        value_coherent_noise_1d(x, i64::from(self.seed), self.quality)
    }
}

impl Module2D for Value {
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        value_coherent_noise_2d(x, y, i64::from(self.seed), self.quality)
    }
}

impl Module3D for Value {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        value_coherent_noise_3d(x, y, z, i64::from(self.seed), self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUALITIES: [NoiseQuality; 3] =
        [NoiseQuality::Fast, NoiseQuality::Standard, NoiseQuality::Best];

    #[test]
    fn test_lattice_values_in_range() {
        for x in -50..50 {
            for y in -5..5 {
                let v = value_noise_3d(x, y, x ^ y, 7);
                assert!((-1.0..=1.0).contains(&v), "lattice value out of range: {v}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let noise = Value::with_seed(1234, NoiseQuality::Best);
        for i in 0..100 {
            let t = i as f32 * 0.731 - 20.0;
            assert_eq!(
                noise.get_3d(t, t * 0.5, -t).to_bits(),
                noise.get_3d(t, t * 0.5, -t).to_bits()
            );
        }
    }

    #[test]
    fn test_seed_changes_output() {
        let a = Value::with_seed(1, NoiseQuality::Standard);
        let b = Value::with_seed(2, NoiseQuality::Standard);
        let differs = (0..32).any(|i| {
            let t = i as f32 * 0.37;
            a.get_3d(t, 0.1, 0.2) != b.get_3d(t, 0.1, 0.2)
        });
        assert!(differs, "different seeds produced identical noise");
    }

    #[test]
    fn test_interpolates_lattice_points() {
        let noise = Value::with_seed(9, NoiseQuality::Standard);
        let expected = value_noise_3d(3, 4, 5, 9);
        let v = noise.get_3d(3.0 + 1e-4, 4.0 + 1e-4, 5.0 + 1e-4);
        assert!((v - expected).abs() < 1e-2, "{v} vs lattice {expected}");
    }

    #[test]
    fn test_continuous_at_integer_boundaries() {
        for quality in QUALITIES {
            let noise = Value::with_seed(3, quality);
            for k in -3..=3 {
                let x = k as f32;
                let at = noise.get_3d(x, 0.3, 0.7);
                let near = noise.get_3d(x + 1e-3, 0.3, 0.7);
                assert!(
                    (at - near).abs() < 1e-2,
                    "discontinuity at x={x} ({quality}): {at} vs {near}"
                );
            }
        }
    }

    #[test]
    fn test_lower_dimensions_in_range() {
        let noise = Value::new();
        for i in 0..200 {
            let t = i as f32 * 0.173 - 17.0;
            assert!((-1.0..=1.0).contains(&noise.get_1d(t)));
            assert!((-1.0..=1.0).contains(&noise.get_2d(t, -t * 0.3)));
        }
    }

    #[test]
    fn test_coordinates_beyond_i32_range() {
        for quality in QUALITIES {
            let noise = Value::with_seed(0, quality);
            let v = noise.get_3d(-3.0e9, 0.5, 0.5);
            assert!((-1.0..=1.0).contains(&v), "far value out of range ({quality}): {v}");
            assert!(noise.get_2d(3.0e9, -3.0e9).is_finite());
            assert!(noise.get_1d(-2_147_483_648.0).is_finite());
        }
    }
}
