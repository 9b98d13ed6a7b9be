use super::{FractalConfig, impl_fractal_filter, scale};

/// Marble-like bands: the weighted octave sum is used as a phase shift,
/// returning `sin(x + sum)` where `x` is the unscaled input coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct SinFractal<P> {
    source: P,
    config: FractalConfig,
}

impl<P> SinFractal<P> {
    pub fn new(source: P) -> Self {
        Self::with_config(source, FractalConfig::default())
    }

    pub fn with_config(source: P, config: FractalConfig) -> Self {
        Self { source, config }
    }

    fn evaluate<const N: usize>(&self, mut point: [f32; N], sample: impl Fn([f32; N]) -> f32) -> f32 {
        let config = &self.config;
        let (octaves, remainder) = config.octaves();
        let x = point[0];
        scale(&mut point, config.frequency());

        let mut value = 0.0;
        for octave in 0..octaves {
            value += sample(point) * config.weight(octave);
            scale(&mut point, config.lacunarity());
        }

        if remainder > 0.0 {
            value += remainder * sample(point) * config.weight(octaves);
        }
        libm::sinf(x + value)
    }
}

impl_fractal_filter!(SinFractal);
