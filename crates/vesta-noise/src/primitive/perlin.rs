//! Improved gradient noise.

use crate::math::{clamp01, fast_floor, lerp};
use crate::module::{Module1D, Module2D, Module3D};
use crate::quality::NoiseQuality;

use super::DEFAULT_SEED;

/// Reference permutation of `0..=255`.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Seeded permutation, doubled to 512 entries so nested lookups never wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PermutationTable {
    values: [u8; 512],
}

impl PermutationTable {
    /// Seed 0 yields the reference permutation; any other seed XORs every
    /// entry with each little-endian byte of the seed.
    pub(crate) fn new(seed: i32) -> Self {
        let key = seed.to_le_bytes().iter().fold(0u8, |acc, b| acc ^ b);
        let mut values = [0u8; 512];
        for (i, &p) in PERMUTATION.iter().enumerate() {
            values[i] = p ^ key;
            values[i + 256] = p ^ key;
        }
        Self { values }
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> usize {
        usize::from(self.values[index])
    }
}

#[inline]
fn grad3(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[inline]
fn grad1(hash: usize, x: f32) -> f32 {
    if hash & 1 == 0 { x } else { -x }
}

#[inline]
fn lattice(coord: f32) -> (usize, f32) {
    let cell = fast_floor(coord);
    // Only coordinates outside the i32 range leave [0, 1] here.
    ((cell & 0xff) as usize, clamp01(coord - cell as f32))
}

/// Ken Perlin's improved gradient noise. Output lies roughly in `[-1, 1]` and
/// is exactly zero at every lattice point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Perlin {
    seed: i32,
    quality: NoiseQuality,
    table: PermutationTable,
}

impl Perlin {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED, NoiseQuality::default())
    }

    pub fn with_seed(seed: i32, quality: NoiseQuality) -> Self {
        Self {
            seed,
            quality,
            table: PermutationTable::new(seed),
        }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Changing the seed rebuilds the permutation table.
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
        self.table = PermutationTable::new(seed);
    }

    pub fn quality(&self) -> NoiseQuality {
        self.quality
    }

    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.quality = quality;
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new()
    }
}

impl Module1D for Perlin {
    fn get_1d(&self, x: f32) -> f32 {
        let p = &self.table;
        let (xi, x) = lattice(x);
        let u = self.quality.s_curve(x);

        // Sign-only gradients peak at 0.5; double to span [-1, 1].
        2.0 * lerp(grad1(p.get(xi), x), grad1(p.get(xi + 1), x - 1.0), u)
    }
}

impl Module2D for Perlin {
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        let p = &self.table;
        let (xi, x) = lattice(x);
        let (yi, y) = lattice(y);
        let u = self.quality.s_curve(x);
        let v = self.quality.s_curve(y);

        let a = p.get(xi) + yi;
        let aa = p.get(a);
        let ab = p.get(a + 1);
        let b = p.get(xi + 1) + yi;
        let ba = p.get(b);
        let bb = p.get(b + 1);

        lerp(
            lerp(grad3(p.get(aa), x, y, 0.0), grad3(p.get(ba), x - 1.0, y, 0.0), u),
            lerp(
                grad3(p.get(ab), x, y - 1.0, 0.0),
                grad3(p.get(bb), x - 1.0, y - 1.0, 0.0),
                u,
            ),
            v,
        )
    }
}

impl Module3D for Perlin {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let p = &self.table;
        let (xi, x) = lattice(x);
        let (yi, y) = lattice(y);
        let (zi, z) = lattice(z);
        let u = self.quality.s_curve(x);
        let v = self.quality.s_curve(y);
        let w = self.quality.s_curve(z);

        let a = p.get(xi) + yi;
        let aa = p.get(a) + zi;
        let ab = p.get(a + 1) + zi;
        let b = p.get(xi + 1) + yi;
        let ba = p.get(b) + zi;
        let bb = p.get(b + 1) + zi;

        lerp(
            lerp(
                lerp(grad3(p.get(aa), x, y, z), grad3(p.get(ba), x - 1.0, y, z), u),
                lerp(
                    grad3(p.get(ab), x, y - 1.0, z),
                    grad3(p.get(bb), x - 1.0, y - 1.0, z),
                    u,
                ),
                v,
            ),
            lerp(
                lerp(
                    grad3(p.get(aa + 1), x, y, z - 1.0),
                    grad3(p.get(ba + 1), x - 1.0, y, z - 1.0),
                    u,
                ),
                lerp(
                    grad3(p.get(ab + 1), x, y - 1.0, z - 1.0),
                    grad3(p.get(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                    u,
                ),
                v,
            ),
            w,
        )
    }
}
