//! Coherent noise as a graph of composable modules.
//!
//! Primitives ([`Perlin`], [`Simplex`], [`Value`], [`Voronoi`], ...) generate
//! noise; fractal filters layer octaves of a primitive; combinators,
//! modifiers, transformers and selectors compose and reshape any module.
//! Every module is plain data, generic over its children, and is evaluated
//! through the dimensional capability traits [`Module1D`] to [`Module4D`].
//!
//! ```
//! use vesta_noise::{Module3D, NoiseQuality, Perlin, ScaleBias, SumFractal};
//!
//! let terrain = ScaleBias::with_scale_bias(
//!     SumFractal::new(Perlin::with_seed(7, NoiseQuality::Best)),
//!     0.5,
//!     0.25,
//! );
//! let height = terrain.get_3d(1.25, 0.0, -3.5);
//! assert!(height.is_finite());
//! ```
//!
//! A module only exposes the dimensions its whole subgraph supports:
//!
//! ```compile_fail
//! use vesta_noise::{Add, Checkerboard, Module2D, Perlin};
//!
//! // Perlin supports 2D, but Checkerboard is 3D only.
//! let graph = Add::new(Perlin::new(), Checkerboard::new());
//! let _ = graph.get_2d(0.5, 0.5);
//! ```

pub mod combiner;
pub mod error;
pub mod fractal;
pub mod math;
pub mod model;
pub mod modifier;
pub mod module;
pub mod primitive;
pub mod quality;
pub mod selector;
pub mod transformer;

pub use combiner::{Add, Max, Min, Multiply, Power, Subtract};
pub use error::NoiseError;
pub use fractal::{
    Billow, FractalConfig, HeterogeneousMultiFractal, HybridMultiFractal, MAX_OCTAVES,
    MultiFractal, Pipe, RidgedMultiFractal, SinFractal, SpectralWeights, SumFractal,
};
pub use model::{CylinderModel, LineModel, PlaneModel, SphereModel};
pub use modifier::{Abs, Clamp, ControlPoint, Curve, Exponent, Invert, ScaleBias, Terrace};
pub use module::{Module1D, Module2D, Module3D, Module4D};
pub use primitive::{
    Checkerboard, Constant, Cylinders, Perlin, Simplex, Spheres, Value, Voronoi,
};
pub use quality::NoiseQuality;
pub use selector::{Blend, Select};
pub use transformer::{
    Displace, PerlinDistortion, RotatePoint, ScalePoint, TranslatePoint, Turbulence,
};
