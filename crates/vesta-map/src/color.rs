//! 8-bit RGBA colors.

use vesta_noise::math::lerp;

/// An RGBA color with 8 bits per channel. Equality and hashing are by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// How [`Color::grayscale`] collapses three channels into one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrayscaleStrategy {
    /// Mean of the brightest and darkest channel.
    Lightness,
    /// Plain mean of the three channels.
    Average,
    /// Weighted for perceived brightness (0.21 R, 0.71 G, 0.07 B).
    #[default]
    Luminosity,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Blend towards `other`; `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
            lerp_channel(self.a, other.a, t),
        )
    }

    /// Blend the color channels only; the result is opaque.
    pub fn lerp_opaque(self, other: Self, t: f32) -> Self {
        Self {
            a: 255,
            ..self.lerp(other, t)
        }
    }

    /// Single gray level for this color.
    pub fn gray_level(self, strategy: GrayscaleStrategy) -> u8 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        match strategy {
            GrayscaleStrategy::Lightness => ((r.max(g).max(b) + r.min(g).min(b)) / 2) as u8,
            GrayscaleStrategy::Average => ((r + g + b) / 3) as u8,
            GrayscaleStrategy::Luminosity => {
                (0.21 * self.r as f32 + 0.71 * self.g as f32 + 0.07 * self.b as f32) as u8
            }
        }
    }

    /// Opaque gray color with this color's gray level.
    pub fn grayscale(self, strategy: GrayscaleStrategy) -> Self {
        let level = self.gray_level(strategy);
        Self::rgb(level, level, level)
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    lerp(a as f32, b as f32, t) as u8
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
