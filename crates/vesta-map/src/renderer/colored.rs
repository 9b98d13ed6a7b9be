use tracing::debug;

use super::{cells, ensure_not_empty};
use crate::error::MapError;
use crate::gradient::ColorGradient;
use crate::map::{Image, NoiseMap};

/// Colors a noise map through a [`ColorGradient`].
#[derive(Clone, Debug)]
pub struct ImageRenderer {
    gradient: ColorGradient,
}

impl ImageRenderer {
    pub fn new(gradient: ColorGradient) -> Self {
        Self { gradient }
    }

    pub fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }

    pub fn gradient_mut(&mut self) -> &mut ColorGradient {
        &mut self.gradient
    }

    /// Resize `image` to match `map` and color every pixel.
    pub fn render(&self, map: &NoiseMap, image: &mut Image) -> Result<(), MapError> {
        ensure_not_empty(map)?;
        self.gradient.validate()?;
        image.set_size(map.width(), map.height())?;

        debug!(
            width = map.width(),
            height = map.height(),
            points = self.gradient.len(),
            "Rendering color image"
        );
        for (x, y) in cells(map) {
            image.set(x, y, self.gradient.color_at(map.get(x, y)));
        }
        Ok(())
    }
}

impl Default for ImageRenderer {
    fn default() -> Self {
        Self::new(ColorGradient::grayscale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_renders_through_gradient() {
        let mut map = NoiseMap::with_size(3, 1).unwrap();
        map.set(0, 0, -1.0);
        map.set(1, 0, 0.0);
        map.set(2, 0, 4.0);

        let mut image = Image::new();
        ImageRenderer::default().render(&map, &mut image).unwrap();

        assert_eq!((image.width(), image.height()), (3, 1));
        assert_eq!(image.get(0, 0), Color::BLACK);
        assert_eq!(image.get(1, 0), Color::rgb(127, 127, 127));
        assert_eq!(image.get(2, 0), Color::WHITE);
    }

    #[test]
    fn test_rejects_short_gradient() {
        let map = NoiseMap::with_size(2, 2).unwrap();
        let renderer = ImageRenderer::new(ColorGradient::new());
        let result = renderer.render(&map, &mut Image::new());
        assert!(matches!(result, Err(MapError::NotEnoughGradientPoints(0))));
    }

    #[test]
    fn test_rejects_empty_map() {
        let result = ImageRenderer::default().render(&NoiseMap::new(), &mut Image::new());
        assert!(matches!(result, Err(MapError::EmptyMap)));
    }
}
