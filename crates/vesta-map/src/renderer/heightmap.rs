use std::marker::PhantomData;

use tracing::debug;
use vesta_noise::math::lerp;

use super::{cells, ensure_not_empty};
use crate::error::MapError;
use crate::map::{DataMap, NoiseMap};

/// A cell type a [`HeightmapRenderer`] can write.
pub trait Elevation: Copy + Default {
    /// Convert `source` using the renderer bounds `lower < upper`.
    fn from_height(source: f32, lower: f32, upper: f32) -> Self;
}

impl Elevation for u8 {
    fn from_height(source: f32, lower: f32, upper: f32) -> Self {
        if source <= lower {
            u8::MIN
        } else if source >= upper {
            u8::MAX
        } else {
            ((source - lower) / (upper - lower) * 255.0) as u8
        }
    }
}

impl Elevation for u16 {
    fn from_height(source: f32, lower: f32, upper: f32) -> Self {
        if source <= lower {
            u16::MIN
        } else if source >= upper {
            u16::MAX
        } else {
            ((source - lower) / (upper - lower) * 65535.0) as u16
        }
    }
}

/// Floating-point heightmaps keep the value, clamped to the bounds.
impl Elevation for f32 {
    fn from_height(source: f32, lower: f32, upper: f32) -> Self {
        source.clamp(lower, upper)
    }
}

/// Converts a noise map into a [`Heightmap8`](crate::map::Heightmap8),
/// [`Heightmap16`](crate::map::Heightmap16) or
/// [`Heightmap32`](crate::map::Heightmap32).
///
/// Values at or below the lower bound map to the smallest elevation, values at
/// or above the upper bound to the largest. With wrapping on, edge cells are
/// averaged with the opposite edge so tiled heightmaps meet cleanly.
#[derive(Clone, Copy, Debug)]
pub struct HeightmapRenderer<T> {
    lower: f32,
    upper: f32,
    wrap: bool,
    _elevation: PhantomData<fn() -> T>,
}

impl<T: Elevation> HeightmapRenderer<T> {
    /// Renderer with bounds `[-1, 1]` and wrapping off.
    pub fn new() -> Self {
        Self {
            lower: -1.0,
            upper: 1.0,
            wrap: false,
            _elevation: PhantomData,
        }
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }

    pub fn set_bounds(&mut self, lower: f32, upper: f32) -> Result<(), MapError> {
        if !(lower < upper) {
            return Err(MapError::InvalidBounds { lower, upper });
        }
        self.lower = lower;
        self.upper = upper;
        Ok(())
    }

    /// Set the bounds to the smallest and largest values in `map`.
    pub fn exact_fit(&mut self, map: &NoiseMap) -> Result<(), MapError> {
        let (min, max) = map.min_max().ok_or(MapError::EmptyMap)?;
        self.set_bounds(min, max)
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Resize `heightmap` to match `map` and fill it.
    pub fn render(&self, map: &NoiseMap, heightmap: &mut DataMap<T>) -> Result<(), MapError> {
        ensure_not_empty(map)?;
        heightmap.set_size(map.width(), map.height())?;

        debug!(
            width = map.width(),
            height = map.height(),
            lower = self.lower,
            upper = self.upper,
            "Rendering heightmap"
        );

        let right = map.width() as isize - 1;
        let top = map.height() as isize - 1;
        for (x, y) in cells(map) {
            let mut value = map.get(x, y);
            if self.wrap {
                let x_opposite = opposite_edge(x, right);
                let y_opposite = opposite_edge(y, top);
                if x_opposite != x || y_opposite != y {
                    value = lerp(value, map.get(x_opposite, y_opposite), 0.5);
                }
            }
            heightmap.set(x, y, T::from_height(value, self.lower, self.upper));
        }
        Ok(())
    }
}

impl<T: Elevation> Default for HeightmapRenderer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The matching cell on the opposite edge, or `i` itself for interior cells.
fn opposite_edge(i: isize, last: isize) -> isize {
    if i == last {
        0
    } else if i == 0 {
        last
    } else {
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Heightmap8, Heightmap16, Heightmap32};

    fn ramp() -> NoiseMap {
        let mut map = NoiseMap::with_size(5, 1).unwrap();
        for (x, v) in [-2.0, -1.0, 0.0, 1.0, 2.0].into_iter().enumerate() {
            map.set(x as isize, 0, v);
        }
        map
    }

    #[test]
    fn test_quantise_to_u8() {
        let mut heightmap = Heightmap8::new();
        HeightmapRenderer::new()
            .render(&ramp(), &mut heightmap)
            .unwrap();
        assert_eq!(heightmap.row(0), &[0, 0, 127, 255, 255]);
    }

    #[test]
    fn test_quantise_to_u16() {
        let mut heightmap = Heightmap16::new();
        HeightmapRenderer::new()
            .render(&ramp(), &mut heightmap)
            .unwrap();
        assert_eq!(heightmap.row(0), &[0, 0, 32767, 65535, 65535]);
    }

    #[test]
    fn test_f32_heightmap_clamps() {
        let mut heightmap = Heightmap32::new();
        HeightmapRenderer::new()
            .render(&ramp(), &mut heightmap)
            .unwrap();
        assert_eq!(heightmap.row(0), &[-1.0, -1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_exact_fit_spans_map() {
        let mut renderer = HeightmapRenderer::<u8>::new();
        renderer.exact_fit(&ramp()).unwrap();
        assert_eq!(renderer.bounds(), (-2.0, 2.0));

        let mut heightmap = Heightmap8::new();
        renderer.render(&ramp(), &mut heightmap).unwrap();
        assert_eq!(heightmap.get(0, 0), 0);
        assert_eq!(heightmap.get(4, 0), 255);
    }

    #[test]
    fn test_exact_fit_rejects_flat_or_empty_maps() {
        let mut renderer = HeightmapRenderer::<u8>::new();
        assert!(matches!(
            renderer.exact_fit(&NoiseMap::new()),
            Err(MapError::EmptyMap)
        ));
        let flat = NoiseMap::with_size(3, 3).unwrap();
        assert!(matches!(
            renderer.exact_fit(&flat),
            Err(MapError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_wrap_averages_opposite_edges() {
        let mut map = NoiseMap::with_size(3, 3).unwrap();
        map.set(0, 1, -1.0);
        map.set(2, 1, 1.0);

        let mut renderer = HeightmapRenderer::<f32>::new();
        renderer.set_wrap(true);
        let mut heightmap = Heightmap32::new();
        renderer.render(&map, &mut heightmap).unwrap();

        assert_eq!(heightmap.get(0, 1), 0.0);
        assert_eq!(heightmap.get(2, 1), 0.0);
        assert_eq!(heightmap.get(1, 1), 0.0);
    }

    #[test]
    fn test_invalid_bounds() {
        let mut renderer = HeightmapRenderer::<u16>::new();
        assert!(renderer.set_bounds(0.5, 0.5).is_err());
        assert!(renderer.set_bounds(0.5, -0.5).is_err());
        assert_eq!(renderer.bounds(), (-1.0, 1.0));
    }
}
