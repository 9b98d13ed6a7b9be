use crate::module::{Module1D, Module2D, Module3D, Module4D};

/// Outputs the same value at every point, in every dimensionality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    /// Value used by [`Constant::default`].
    pub const DEFAULT_VALUE: f32 = 0.5;

    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl Default for Constant {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VALUE)
    }
}

impl Module1D for Constant {
    fn get_1d(&self, _x: f32) -> f32 {
        self.value
    }
}

impl Module2D for Constant {
    fn get_2d(&self, _x: f32, _y: f32) -> f32 {
        self.value
    }
}

impl Module3D for Constant {
    fn get_3d(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.value
    }
}

impl Module4D for Constant {
    fn get_4d(&self, _x: f32, _y: f32, _z: f32, _t: f32) -> f32 {
        self.value
    }
}
