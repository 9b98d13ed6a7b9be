//! Simplex noise in two, three and four dimensions.
//!
//! Space is skewed so that each hypercube splits into simplices; the point's
//! simplex is found from the ordering of its offsets within the cube, and each
//! corner contributes `(r² − d²)⁴ · (gradient · offset)`.

use crate::math::{SQRT3, SQRT5};
use crate::module::{Module2D, Module3D, Module4D};

use super::{DEFAULT_SEED, PermutationTable};

const F2: f32 = 0.5 * (SQRT3 - 1.0);
const G2: f32 = (3.0 - SQRT3) / 6.0;
const G22: f32 = G2 * 2.0 - 1.0;

const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

const F4: f32 = (SQRT5 - 1.0) / 4.0;
const G4: f32 = (5.0 - SQRT5) / 20.0;
const G42: f32 = G4 * 2.0;
const G43: f32 = G4 * 3.0;
const G44: f32 = G4 * 4.0 - 1.0;

/// Midpoints of the edges of a cube. 2D uses the first two components.
const GRAD3: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Midpoints of the edges of a 4D hypercube.
const GRAD4: [[i8; 4]; 32] = [
    [0, 1, 1, 1],
    [0, 1, 1, -1],
    [0, 1, -1, 1],
    [0, 1, -1, -1],
    [0, -1, 1, 1],
    [0, -1, 1, -1],
    [0, -1, -1, 1],
    [0, -1, -1, -1],
    [1, 0, 1, 1],
    [1, 0, 1, -1],
    [1, 0, -1, 1],
    [1, 0, -1, -1],
    [-1, 0, 1, 1],
    [-1, 0, 1, -1],
    [-1, 0, -1, 1],
    [-1, 0, -1, -1],
    [1, 1, 0, 1],
    [1, 1, 0, -1],
    [1, -1, 0, 1],
    [1, -1, 0, -1],
    [-1, 1, 0, 1],
    [-1, 1, 0, -1],
    [-1, -1, 0, 1],
    [-1, -1, 0, -1],
    [1, 1, 1, 0],
    [1, 1, -1, 0],
    [1, -1, 1, 0],
    [1, -1, -1, 0],
    [-1, 1, 1, 0],
    [-1, 1, -1, 0],
    [-1, -1, 1, 0],
    [-1, -1, -1, 0],
];

/// Traversal order of the 4D simplex, indexed by the six pairwise comparison bits.
/// Only 24 of the 64 entries are reachable; the rest are zero.
#[rustfmt::skip]
const SIMPLEX4: [[u8; 4]; 64] = [
    [0, 1, 2, 3], [0, 1, 3, 2], [0, 0, 0, 0], [0, 2, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 2, 3, 0],
    [0, 2, 1, 3], [0, 0, 0, 0], [0, 3, 1, 2], [0, 3, 2, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [1, 3, 2, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [1, 2, 0, 3], [0, 0, 0, 0], [1, 3, 0, 2], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [2, 3, 0, 1], [2, 3, 1, 0],
    [1, 0, 2, 3], [1, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [2, 0, 3, 1], [0, 0, 0, 0], [2, 1, 3, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [2, 0, 1, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 0, 1, 2], [3, 0, 2, 1], [0, 0, 0, 0], [3, 1, 2, 0],
    [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [3, 1, 0, 2], [0, 0, 0, 0], [3, 2, 0, 1], [3, 2, 1, 0],
];

/// Contribution of one simplex corner: `(radius² − |offset|²)⁴ · (gradient · offset)`,
/// or zero outside the kernel.
#[inline]
fn corner<const N: usize>(radius_sq: f32, offset: [f32; N], gradient: &[i8]) -> f32 {
    let t = offset.iter().fold(radius_sq, |t, o| t - o * o);
    if t > 0.0 {
        let t = t * t;
        let dot = offset
            .iter()
            .zip(gradient)
            .fold(0.0, |acc, (o, &g)| acc + f32::from(g) * o);
        t * t * dot
    } else {
        0.0
    }
}

#[inline]
fn floor(x: f32) -> i32 {
    libm::floorf(x) as i32
}

#[inline]
fn wrap(cell: i32) -> usize {
    (cell & 0xff) as usize
}

#[inline]
fn step(offset: usize) -> f32 {
    offset as f32
}

/// Simplex noise primitive.
///
/// Shares the seeded permutation of [`Perlin`](super::Perlin). Interpolation
/// quality has no meaning for simplex noise, so only the seed is configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simplex {
    seed: i32,
    table: PermutationTable,
}

impl Simplex {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            table: PermutationTable::new(seed),
        }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
        self.table = PermutationTable::new(seed);
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}

impl Module2D for Simplex {
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        let p = &self.table;

        let s = (x + y) * F2;
        let i = floor(x + s);
        let j = floor(y + s);
        let t = i.wrapping_add(j) as f32 * G2;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);

        // Lower triangle steps along x first, upper along y.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - step(i1) + G2;
        let y1 = y0 - step(j1) + G2;
        let x2 = x0 + G22;
        let y2 = y0 + G22;

        let (ii, jj) = (wrap(i), wrap(j));
        let gi0 = p.get(ii + p.get(jj)) % 12;
        let gi1 = p.get(ii + i1 + p.get(jj + j1)) % 12;
        let gi2 = p.get(ii + 1 + p.get(jj + 1)) % 12;

        let n0 = corner(0.5, [x0, y0], &GRAD3[gi0]);
        let n1 = corner(0.5, [x1, y1], &GRAD3[gi1]);
        let n2 = corner(0.5, [x2, y2], &GRAD3[gi2]);

        70.0 * (n0 + n1 + n2)
    }
}

impl Module3D for Simplex {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let p = &self.table;

        let s = (x + y + z) * F3;
        let i = floor(x + s);
        let j = floor(y + s);
        let k = floor(z + s);
        let t = i.wrapping_add(j).wrapping_add(k) as f32 * G3;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);

        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let c1 = [x0 - step(i1) + G3, y0 - step(j1) + G3, z0 - step(k1) + G3];
        let c2 = [x0 - step(i2) + F3, y0 - step(j2) + F3, z0 - step(k2) + F3];
        let c3 = [x0 - 0.5, y0 - 0.5, z0 - 0.5];

        let (ii, jj, kk) = (wrap(i), wrap(j), wrap(k));
        let gi0 = p.get(ii + p.get(jj + p.get(kk))) % 12;
        let gi1 = p.get(ii + i1 + p.get(jj + j1 + p.get(kk + k1))) % 12;
        let gi2 = p.get(ii + i2 + p.get(jj + j2 + p.get(kk + k2))) % 12;
        let gi3 = p.get(ii + 1 + p.get(jj + 1 + p.get(kk + 1))) % 12;

        let n0 = corner(0.6, [x0, y0, z0], &GRAD3[gi0]);
        let n1 = corner(0.6, c1, &GRAD3[gi1]);
        let n2 = corner(0.6, c2, &GRAD3[gi2]);
        let n3 = corner(0.6, c3, &GRAD3[gi3]);

        32.0 * (n0 + n1 + n2 + n3)
    }
}

impl Module4D for Simplex {
    fn get_4d(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        let p = &self.table;

        let s = (x + y + z + w) * F4;
        let i = floor(x + s);
        let j = floor(y + s);
        let k = floor(z + s);
        let l = floor(w + s);
        let t = i.wrapping_add(j).wrapping_add(k).wrapping_add(l) as f32 * G4;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);
        let w0 = w - (l as f32 - t);

        let mut c = 0;
        if x0 > y0 {
            c |= 0x20;
        }
        if x0 > z0 {
            c |= 0x10;
        }
        if y0 > z0 {
            c |= 0x08;
        }
        if x0 > w0 {
            c |= 0x04;
        }
        if y0 > w0 {
            c |= 0x02;
        }
        if z0 > w0 {
            c |= 0x01;
        }

        // Rank 3 marks the largest coordinate, so corners step along it first.
        let order = SIMPLEX4[c];
        let offsets = |rank: u8| order.map(|o| usize::from(o >= rank));
        let [i1, j1, k1, l1] = offsets(3);
        let [i2, j2, k2, l2] = offsets(2);
        let [i3, j3, k3, l3] = offsets(1);

        let c1 = [
            x0 - step(i1) + G4,
            y0 - step(j1) + G4,
            z0 - step(k1) + G4,
            w0 - step(l1) + G4,
        ];
        let c2 = [
            x0 - step(i2) + G42,
            y0 - step(j2) + G42,
            z0 - step(k2) + G42,
            w0 - step(l2) + G42,
        ];
        let c3 = [
            x0 - step(i3) + G43,
            y0 - step(j3) + G43,
            z0 - step(k3) + G43,
            w0 - step(l3) + G43,
        ];
        let c4 = [x0 + G44, y0 + G44, z0 + G44, w0 + G44];

        let (ii, jj, kk, ll) = (wrap(i), wrap(j), wrap(k), wrap(l));
        let hash = |di: usize, dj: usize, dk: usize, dl: usize| {
            p.get(ii + di + p.get(jj + dj + p.get(kk + dk + p.get(ll + dl)))) % 32
        };

        let n0 = corner(0.6, [x0, y0, z0, w0], &GRAD4[hash(0, 0, 0, 0)]);
        let n1 = corner(0.6, c1, &GRAD4[hash(i1, j1, k1, l1)]);
        let n2 = corner(0.6, c2, &GRAD4[hash(i2, j2, k2, l2)]);
        let n3 = corner(0.6, c3, &GRAD4[hash(i3, j3, k3, l3)]);
        let n4 = corner(0.6, c4, &GRAD4[hash(1, 1, 1, 1)]);

        27.0 * (n0 + n1 + n2 + n3 + n4)
    }
}
