use super::{FractalConfig, impl_fractal_filter, scale};

/// Sum of absolute octaves, giving rounded "billowy" shapes such as clouds
/// and rolling hills.
///
/// Each octave contributes `(|sample| * scale + bias) * weight`.
#[derive(Clone, Debug, PartialEq)]
pub struct Billow<P> {
    source: P,
    config: FractalConfig,
    scale: f32,
    bias: f32,
}

impl<P> Billow<P> {
    pub const DEFAULT_SCALE: f32 = 1.0;
    pub const DEFAULT_BIAS: f32 = 0.0;

    pub fn new(source: P) -> Self {
        Self::with_config(source, FractalConfig::default())
    }

    pub fn with_config(source: P, config: FractalConfig) -> Self {
        Self {
            source,
            config,
            scale: Self::DEFAULT_SCALE,
            bias: Self::DEFAULT_BIAS,
        }
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

    fn evaluate<const N: usize>(&self, mut point: [f32; N], sample: impl Fn([f32; N]) -> f32) -> f32 {
        let config = &self.config;
        let (octaves, remainder) = config.octaves();
        let signal = |p: [f32; N]| sample(p).abs() * self.scale + self.bias;
        scale(&mut point, config.frequency());

        let mut value = 0.0;
        for octave in 0..octaves {
            value += signal(point) * config.weight(octave);
            scale(&mut point, config.lacunarity());
        }

        if remainder > 0.0 {
            value += remainder * signal(point) * config.weight(octaves);
        }
        value
    }
}

impl_fractal_filter!(Billow);
