//! Primitive generators: the leaves of a module graph.
//!
//! Every primitive is a pure function of its coordinates and its own
//! configuration (seed, quality, frequency). Lattice-based primitives map
//! coordinates to cells with [`fast_floor`](crate::math::fast_floor).

mod checkerboard;
mod constant;
mod cylinders;
mod perlin;
mod simplex;
mod spheres;
mod value;
mod voronoi;

pub use checkerboard::Checkerboard;
pub use constant::Constant;
pub use cylinders::Cylinders;
pub use perlin::Perlin;
pub use simplex::Simplex;
pub use spheres::Spheres;
pub use value::{
    Value, value_coherent_noise_1d, value_coherent_noise_2d, value_coherent_noise_3d,
    value_noise_1d, value_noise_2d, value_noise_3d,
};
pub use voronoi::Voronoi;

pub(crate) use perlin::PermutationTable;

/// Seed used by primitives created with `new()`.
pub const DEFAULT_SEED: i32 = 0;
