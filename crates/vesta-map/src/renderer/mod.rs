//! Renderers turn a [`NoiseMap`](crate::map::NoiseMap) into pixels or
//! quantised elevations.

mod colored;
mod heightmap;
mod normal;

pub use heightmap::{Elevation, HeightmapRenderer};
pub use colored::ImageRenderer;
pub use normal::NormalMapRenderer;

use crate::error::MapError;
use crate::map::NoiseMap;

fn ensure_not_empty(map: &NoiseMap) -> Result<(), MapError> {
    if map.is_empty() {
        return Err(MapError::EmptyMap);
    }
    Ok(())
}

/// Signed coordinates of every cell, row by row.
fn cells(map: &NoiseMap) -> impl Iterator<Item = (isize, isize)> {
    let (width, height) = (map.width() as isize, map.height() as isize);
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}
