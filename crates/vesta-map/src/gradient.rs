//! Piecewise-linear color gradients over noise values.

use crate::color::Color;
use crate::error::MapError;

/// A color pinned at a position on the gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientPoint {
    pub position: f32,
    pub color: Color,
}

/// Maps a noise value to a color by blending between the two nearest points.
///
/// Points are kept sorted by position, and positions are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorGradient {
    points: Vec<GradientPoint>,
}

impl ColorGradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Black at -1 to white at +1.
    pub fn grayscale() -> Self {
        Self {
            points: vec![
                GradientPoint {
                    position: -1.0,
                    color: Color::BLACK,
                },
                GradientPoint {
                    position: 1.0,
                    color: Color::WHITE,
                },
            ],
        }
    }

    /// Deep water through beach, grass and rock to snow, with sea level at 0.
    pub fn terrain() -> Self {
        let stops = [
            (-1.00, Color::rgb(0, 0, 128)),
            (-0.20, Color::rgb(32, 64, 128)),
            (-0.04, Color::rgb(64, 96, 192)),
            (-0.02, Color::rgb(192, 192, 128)),
            (0.00, Color::rgb(0, 192, 0)),
            (0.25, Color::rgb(192, 192, 0)),
            (0.50, Color::rgb(160, 96, 64)),
            (0.75, Color::rgb(128, 255, 255)),
            (1.00, Color::rgb(255, 255, 255)),
        ];
        Self {
            points: stops
                .into_iter()
                .map(|(position, color)| GradientPoint { position, color })
                .collect(),
        }
    }

    pub fn points(&self) -> &[GradientPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a point, keeping the list sorted.
    pub fn add_point(&mut self, position: f32, color: Color) -> Result<(), MapError> {
        match self
            .points
            .binary_search_by(|p| p.position.total_cmp(&position))
        {
            Ok(_) => Err(MapError::DuplicateGradientPoint(position)),
            Err(index) => {
                self.points.insert(index, GradientPoint { position, color });
                Ok(())
            }
        }
    }

    /// Builder-style [`add_point`](Self::add_point).
    pub fn with_point(mut self, position: f32, color: Color) -> Result<Self, MapError> {
        self.add_point(position, color)?;
        Ok(self)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Fails unless the gradient has enough points to render.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.points.len() < 2 {
            return Err(MapError::NotEnoughGradientPoints(self.points.len()));
        }
        Ok(())
    }

    /// Color at `value`. Values outside the covered range take the color of the
    /// nearest end point. An empty gradient yields [`Color::TRANSPARENT`].
    pub fn color_at(&self, value: f32) -> Color {
        let Some(last) = self.points.len().checked_sub(1) else {
            return Color::TRANSPARENT;
        };

        let upper = self
            .points
            .iter()
            .position(|p| value < p.position)
            .unwrap_or(self.points.len());
        let index0 = upper.saturating_sub(1).min(last);
        let index1 = upper.min(last);

        if index0 == index1 {
            return self.points[index1].color;
        }

        let p0 = self.points[index0];
        let p1 = self.points[index1];
        let alpha = (value - p0.position) / (p1.position - p0.position);
        p0.color.lerp(p1.color, alpha)
    }
}
