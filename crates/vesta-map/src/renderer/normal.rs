use tracing::debug;

use super::{cells, ensure_not_empty};
use crate::color::Color;
use crate::error::MapError;
use crate::map::{Image, NoiseMap};

/// Encodes surface normals of a noise map as RGB, `(0, 0, 1)` pointing out of
/// the image.
///
/// Each normal comes from the differences to the right and upper neighbours.
/// At the far edges those neighbours are the cell itself, or the opposite
/// edge when wrapping is on.
#[derive(Clone, Copy, Debug)]
pub struct NormalMapRenderer {
    bump_height: f32,
    wrap: bool,
}

impl NormalMapRenderer {
    pub const DEFAULT_BUMP_HEIGHT: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            bump_height: Self::DEFAULT_BUMP_HEIGHT,
            wrap: false,
        }
    }

    pub fn bump_height(&self) -> f32 {
        self.bump_height
    }

    /// Scale applied to the noise values before differencing.
    pub fn set_bump_height(&mut self, bump_height: f32) {
        self.bump_height = bump_height;
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Resize `image` to match `map` and fill it with encoded normals.
    pub fn render(&self, map: &NoiseMap, image: &mut Image) -> Result<(), MapError> {
        ensure_not_empty(map)?;
        image.set_size(map.width(), map.height())?;

        debug!(
            width = map.width(),
            height = map.height(),
            bump_height = self.bump_height,
            "Rendering normal map"
        );

        let right = map.width() as isize - 1;
        let top = map.height() as isize - 1;
        for (x, y) in cells(map) {
            let x_right = match (x == right, self.wrap) {
                (false, _) => x + 1,
                (true, true) => 0,
                (true, false) => x,
            };
            let y_up = match (y == top, self.wrap) {
                (false, _) => y + 1,
                (true, true) => 0,
                (true, false) => y,
            };

            let center = map.get(x, y);
            let right_value = map.get(x_right, y);
            let up_value = map.get(x, y_up);
            image.set(x, y, self.normal_color(center, right_value, up_value));
        }
        Ok(())
    }

    fn normal_color(&self, center: f32, right: f32, up: f32) -> Color {
        let dx = (center - right) * self.bump_height;
        let dy = (center - up) * self.bump_height;
        let d = (dx * dx + dy * dy + 1.0).sqrt();
        let encode = |v: f32| ((v / d + 1.0) * 127.5).floor() as u8;
        Color::rgb(encode(dx), encode(dy), encode(1.0))
    }
}

impl Default for NormalMapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_map_points_straight_out() {
        let map = NoiseMap::with_size(4, 4).unwrap();
        let mut image = Image::new();
        NormalMapRenderer::new().render(&map, &mut image).unwrap();
        assert!(image.data().iter().all(|&c| c == Color::rgb(127, 127, 255)));
    }

    #[test]
    fn test_slope_tilts_normal() {
        let mut map = NoiseMap::with_size(3, 1).unwrap();
        for x in 0..3 {
            map.set(x, 0, x as f32);
        }
        let mut image = Image::new();
        NormalMapRenderer::new().render(&map, &mut image).unwrap();

        // Rising to the right: the normal leans towards -x.
        let tilted = image.get(0, 0);
        assert!(tilted.r < 127);
        assert_eq!(tilted.g, 127);
        // Last column has no right neighbour without wrapping.
        assert_eq!(image.get(2, 0), Color::rgb(127, 127, 255));
    }

    #[test]
    fn test_wrap_uses_opposite_edge() {
        let mut map = NoiseMap::with_size(3, 1).unwrap();
        map.set(0, 0, 1.0);
        let mut renderer = NormalMapRenderer::new();
        renderer.set_wrap(true);
        let mut image = Image::new();
        renderer.render(&map, &mut image).unwrap();

        // The last column now sees the raised first column to its right.
        assert!(image.get(2, 0).r < 127);
    }

    #[test]
    fn test_empty_map_rejected() {
        let result = NormalMapRenderer::new().render(&NoiseMap::new(), &mut Image::new());
        assert!(matches!(result, Err(MapError::EmptyMap)));
    }
}
