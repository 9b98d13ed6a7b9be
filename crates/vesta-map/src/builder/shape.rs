use super::{BuilderFilter, FilterLevel};
use crate::map::Image;

/// Masks a build with the red channel of a shape image.
///
/// Red 0 writes the constant value, red 255 keeps the source, and anything in
/// between blends the two. Cells outside the shape read its border color.
#[derive(Clone, Debug)]
pub struct ShapeFilter {
    shape: Image,
    constant: f32,
}

impl ShapeFilter {
    pub const DEFAULT_CONSTANT: f32 = -0.5;

    pub fn new(shape: Image) -> Self {
        Self {
            shape,
            constant: Self::DEFAULT_CONSTANT,
        }
    }

    pub fn shape(&self) -> &Image {
        &self.shape
    }

    pub fn set_shape(&mut self, shape: Image) {
        self.shape = shape;
    }

    pub fn set_constant_value(&mut self, value: f32) {
        self.constant = value;
    }
}

impl BuilderFilter for ShapeFilter {
    fn constant_value(&self) -> f32 {
        self.constant
    }

    fn level(&self, x: usize, y: usize) -> FilterLevel {
        let (Ok(x), Ok(y)) = (isize::try_from(x), isize::try_from(y)) else {
            return FilterLevel::Constant;
        };
        match self.shape.get(x, y).r {
            u8::MIN => FilterLevel::Constant,
            u8::MAX => FilterLevel::Source,
            red => FilterLevel::Filter(red as f32 / 255.0),
        }
    }
}
