use super::{FractalConfig, impl_fractal_filter, scale};

/// Hybrid multifractal: smooth valleys with rough peaks.
///
/// The running weight starts at `gain * (sample + offset)`, is capped at 1
/// before scaling each octave's signal, and is then multiplied by
/// `gain * signal`. Evaluation stops once the weight reaches `0.001`.
#[derive(Clone, Debug, PartialEq)]
pub struct HybridMultiFractal<P> {
    source: P,
    config: FractalConfig,
}

impl<P> HybridMultiFractal<P> {
    /// Uses [`FractalConfig::hybrid`] defaults.
    pub fn new(source: P) -> Self {
        Self::with_config(source, FractalConfig::hybrid())
    }

    pub fn with_config(source: P, config: FractalConfig) -> Self {
        Self { source, config }
    }

    fn evaluate<const N: usize>(&self, mut point: [f32; N], sample: impl Fn([f32; N]) -> f32) -> f32 {
        let config = &self.config;
        let (octaves, remainder) = config.octaves();
        let offset = config.offset();
        scale(&mut point, config.frequency());

        let mut value = sample(point) + offset;
        let mut weight = config.gain() * value;
        scale(&mut point, config.lacunarity());

        let mut octave = 1;
        while weight > 0.001 && octave < octaves {
            weight = weight.min(1.0);

            let signal = (offset + sample(point)) * config.weight(octave) * weight;
            value += signal;
            weight *= config.gain() * signal;

            scale(&mut point, config.lacunarity());
            octave += 1;
        }

        if remainder > 0.0 {
            value += remainder * sample(point) * config.weight(octave);
        }
        value
    }
}

impl_fractal_filter!(HybridMultiFractal);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{Module2D, Module3D};
    use crate::primitive::{Constant, Perlin};

    #[test]
    fn test_two_octaves_of_constant() {
        let mut cfg = FractalConfig::hybrid();
        cfg.set_octave_count(2.0).unwrap();
        let hybrid = HybridMultiFractal::with_config(Constant::new(0.3), cfg);
        // value0 = 1, weight = 1, signal1 = 1 * 2^-0.25 * 1.
        let expected = 1.0 + 2.0f32.powf(-0.25);
        let v = hybrid.get_3d(0.0, 0.0, 0.0);
        assert!((v - expected).abs() < 1e-5, "{v} vs {expected}");
    }

    #[test]
    fn test_low_first_octave_stops_early() {
        let hybrid = HybridMultiFractal::new(Constant::new(-0.7));
        // value0 = 0, so the weight never exceeds the cutoff.
        assert_eq!(hybrid.get_2d(4.0, 2.0), 0.0);
    }

    #[test]
    fn test_deterministic_over_perlin() {
        let hybrid = HybridMultiFractal::new(Perlin::with_seed(2, Default::default()));
        let a = hybrid.get_3d(1.5, 2.5, 3.5);
        assert_eq!(a.to_bits(), hybrid.get_3d(1.5, 2.5, 3.5).to_bits());
        assert!(a.is_finite());
    }
}
