//! Noise maps, builders, renderers and writers for `vesta-noise` graphs.
//!
//! A typical pipeline builds a [`NoiseMap`] from a module with one of the
//! builders, renders it to an [`Image`] or a heightmap, and writes the result:
//!
//! ```no_run
//! use std::path::Path;
//! use vesta_map::{ColorGradient, ImageRenderer, Image, NoiseMap, PlaneBuilder, write_png};
//! use vesta_noise::{Perlin, SumFractal};
//!
//! # fn main() -> Result<(), vesta_map::MapError> {
//! let terrain = SumFractal::new(Perlin::new());
//! let mut map = NoiseMap::new();
//! PlaneBuilder::new(256, 256).build(&terrain, &mut map)?;
//!
//! let mut image = Image::new();
//! ImageRenderer::new(ColorGradient::terrain()).render(&map, &mut image)?;
//! write_png(&image, Path::new("terrain.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod color;
pub mod error;
pub mod gradient;
pub mod map;
pub mod renderer;
pub mod writer;

pub use builder::{
    BuilderFilter, CylinderBuilder, FilterLevel, PlaneBuilder, ShapeFilter, SphereBuilder,
};
pub use color::{Color, GrayscaleStrategy};
pub use error::MapError;
pub use gradient::{ColorGradient, GradientPoint};
pub use map::{DataMap, Heightmap8, Heightmap16, Heightmap32, Image, NoiseMap};
pub use renderer::{Elevation, HeightmapRenderer, ImageRenderer, NormalMapRenderer};
pub use writer::{RawSample, write_bmp, write_png, write_raw_heightmap};
