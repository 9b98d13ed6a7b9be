use crate::math::{SQRT3, fast_floor};
use crate::module::Module3D;

use super::DEFAULT_SEED;
use super::value::value_noise_3d;

/// Cellular noise: space is split into cells around pseudo-randomly placed
/// seed points, and every point takes the value of its nearest seed.
///
/// Each seed point is offset inside its unit cell by lattice value noise
/// (seeds `seed`, `seed + 1` and `seed + 2` for the three axes). With
/// `distance` enabled the output also grows with the distance to the seed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voronoi {
    seed: i32,
    frequency: f32,
    displacement: f32,
    distance: bool,
}

impl Voronoi {
    pub const DEFAULT_FREQUENCY: f32 = 1.0;
    pub const DEFAULT_DISPLACEMENT: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            frequency: Self::DEFAULT_FREQUENCY,
            displacement: Self::DEFAULT_DISPLACEMENT,
            distance: false,
        }
    }

    pub fn with_seed(seed: i32) -> Self {
        Self { seed, ..Self::new() }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    /// Scale of the per-cell random value added to the output.
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    pub fn set_displacement(&mut self, displacement: f32) {
        self.displacement = displacement;
    }

    /// Whether the distance to the nearest seed point is added to the output.
    pub fn distance(&self) -> bool {
        self.distance
    }

    pub fn set_distance(&mut self, distance: bool) {
        self.distance = distance;
    }
}

impl Default for Voronoi {
    fn default() -> Self {
        Self::new()
    }
}

impl Module3D for Voronoi {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let (x, y, z) = (x * self.frequency, y * self.frequency, z * self.frequency);
        let (xi, yi, zi) = (fast_floor(x), fast_floor(y), fast_floor(z));
        let seed = i64::from(self.seed);

        let mut min_dist = f32::MAX;
        let mut candidate = (0.0, 0.0, 0.0);

        // The nearest seed point is always within two cells of the input.
        for oz in -2..=2 {
            let zc = zi.wrapping_add(oz);
            for oy in -2..=2 {
                let yc = yi.wrapping_add(oy);
                for ox in -2..=2 {
                    let xc = xi.wrapping_add(ox);
                    let px = xc as f32 + value_noise_3d(xc, yc, zc, seed);
                    let py = yc as f32 + value_noise_3d(xc, yc, zc, seed + 1);
                    let pz = zc as f32 + value_noise_3d(xc, yc, zc, seed + 2);
                    let (dx, dy, dz) = (px - x, py - y, pz - z);
                    let dist = dx * dx + dy * dy + dz * dz;
                    if dist < min_dist {
                        min_dist = dist;
                        candidate = (px, py, pz);
                    }
                }
            }
        }

        let value = if self.distance {
            libm::sqrtf(min_dist) * SQRT3 - 1.0
        } else {
            0.0
        };

        let (cx, cy, cz) = candidate;
        value
            + self.displacement
                * value_noise_3d(
                    libm::floorf(cx) as i32,
                    libm::floorf(cy) as i32,
                    libm::floorf(cz) as i32,
                    seed,
                )
    }
}
