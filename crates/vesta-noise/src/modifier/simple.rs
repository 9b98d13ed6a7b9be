use super::impl_output_modifier;

/// Absolute value of the source output.
#[derive(Clone, Debug, PartialEq)]
pub struct Abs<S> {
    source: S,
}

impl<S> Abs<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl_output_modifier!(Abs, |_this, value| value.abs());

/// Negated source output.
#[derive(Clone, Debug, PartialEq)]
pub struct Invert<S> {
    source: S,
}

impl<S> Invert<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl_output_modifier!(Invert, |_this, value| -value);

/// `source * scale + bias`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBias<S> {
    source: S,
    scale: f32,
    bias: f32,
}

impl<S> ScaleBias<S> {
    pub const DEFAULT_SCALE: f32 = 1.0;
    pub const DEFAULT_BIAS: f32 = 0.0;

    pub fn new(source: S) -> Self {
        Self::with_scale_bias(source, Self::DEFAULT_SCALE, Self::DEFAULT_BIAS)
    }

    pub fn with_scale_bias(source: S, scale: f32, bias: f32) -> Self {
        Self {
            source,
            scale,
            bias,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }
}

impl_output_modifier!(ScaleBias, |this, value| value * this.scale + this.bias);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{Module1D, Module2D, Module3D};
    use crate::primitive::Constant;

    #[test]
    fn test_abs_and_invert() {
        assert_eq!(Abs::new(Constant::new(-0.75)).get_3d(0.0, 0.0, 0.0), 0.75);
        assert_eq!(Invert::new(Constant::new(0.75)).get_2d(0.0, 0.0), -0.75);
    }

    #[test]
    fn test_scale_bias() {
        let mut sb = ScaleBias::new(Constant::new(0.5));
        assert_eq!(sb.get_1d(0.0), 0.5);
        sb.set_scale(4.0);
        sb.set_bias(-1.0);
        assert_eq!(sb.get_1d(0.0), 1.0);
    }
}
