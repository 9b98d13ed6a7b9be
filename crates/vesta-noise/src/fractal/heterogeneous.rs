use super::{FractalConfig, impl_fractal_filter, scale};

/// Heterogeneous multifractal: every octave is scaled by the running value,
/// so terrain that is already high gets rougher.
#[derive(Clone, Debug, PartialEq)]
pub struct HeterogeneousMultiFractal<P> {
    source: P,
    config: FractalConfig,
}

impl<P> HeterogeneousMultiFractal<P> {
    pub fn new(source: P) -> Self {
        Self::with_config(source, FractalConfig::default())
    }

    pub fn with_config(source: P, config: FractalConfig) -> Self {
        Self { source, config }
    }

    fn evaluate<const N: usize>(&self, mut point: [f32; N], sample: impl Fn([f32; N]) -> f32) -> f32 {
        let config = &self.config;
        let (octaves, remainder) = config.octaves();
        let offset = config.offset();
        scale(&mut point, config.frequency());

        let mut value = offset + sample(point);
        scale(&mut point, config.lacunarity());

        for octave in 1..octaves {
            let signal = (offset + sample(point)) * config.weight(octave) * value;
            value += signal;
            scale(&mut point, config.lacunarity());
        }

        if remainder > 0.0 {
            let signal = (offset + sample(point)) * config.weight(octaves) * value;
            value += remainder * signal;
        }
        value
    }
}

impl_fractal_filter!(HeterogeneousMultiFractal);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module3D;
    use crate::primitive::Constant;

    fn config(octaves: f32) -> FractalConfig {
        let mut cfg = FractalConfig::default();
        cfg.set_octave_count(octaves).unwrap();
        cfg.set_exponent(1.0);
        cfg
    }

    #[test]
    fn test_running_value_feeds_each_octave() {
        let hetero = HeterogeneousMultiFractal::with_config(Constant::new(0.0), config(3.0));
        // 1 -> 1 + 0.5 * 1 -> 1.5 + 0.25 * 1.5
        let expected = 1.875;
        assert!((hetero.get_3d(0.0, 0.0, 0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_remainder_octave() {
        let hetero = HeterogeneousMultiFractal::with_config(Constant::new(0.0), config(1.5));
        // 1 + 0.5 * (1 * 0.5 * 1)
        let expected = 1.25;
        assert!((hetero.get_3d(2.0, 2.0, 2.0) - expected).abs() < 1e-6);
    }
}
