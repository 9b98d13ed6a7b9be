use crate::math::clamp01;

use super::{FractalConfig, impl_fractal_filter, scale};

/// Ridged multifractal: sharp crests where the source crosses zero, with
/// each octave's strength fed back from the previous octave's signal.
///
/// The first octave seeds `signal = (offset - |sample|)²`. Every following
/// octave is weighted by `clamp01(previous_signal * gain)` before being added,
/// and the loop stops early once that weight drops to `0.001` or less.
/// There is no fractional remainder octave.
#[derive(Clone, Debug, PartialEq)]
pub struct RidgedMultiFractal<P> {
    source: P,
    config: FractalConfig,
}

impl<P> RidgedMultiFractal<P> {
    pub fn new(source: P) -> Self {
        Self::with_config(source, FractalConfig::default())
    }

    pub fn with_config(source: P, config: FractalConfig) -> Self {
        Self { source, config }
    }

    fn evaluate<const N: usize>(&self, mut point: [f32; N], sample: impl Fn([f32; N]) -> f32) -> f32 {
        let config = &self.config;
        let (octaves, _) = config.octaves();
        let offset = config.offset();
        scale(&mut point, config.frequency());

        let mut signal = offset - sample(point).abs();
        signal *= signal;
        let mut value = signal;
        let mut weight = 1.0;

        let mut octave = 1;
        while weight > 0.001 && octave < octaves {
            scale(&mut point, config.lacunarity());
            weight = clamp01(signal * config.gain());

            signal = offset - sample(point).abs();
            signal *= signal;
            signal *= weight;

            value += signal * config.weight(octave);
            octave += 1;
        }
        value
    }
}

impl_fractal_filter!(RidgedMultiFractal);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{Module2D, Module3D};
    use crate::primitive::{Constant, Perlin};

    #[test]
    fn test_single_octave_is_squared_ridge() {
        let mut cfg = FractalConfig::default();
        cfg.set_octave_count(1.0).unwrap();
        let ridged = RidgedMultiFractal::with_config(Constant::new(-0.25), cfg);
        let expected = (1.0f32 - 0.25) * (1.0 - 0.25);
        assert!((ridged.get_3d(0.0, 0.0, 0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_feedback_weights_second_octave() {
        let mut cfg = FractalConfig::default();
        cfg.set_octave_count(2.0).unwrap();
        cfg.set_exponent(1.0);
        cfg.set_gain(0.5);
        let ridged = RidgedMultiFractal::with_config(Constant::new(0.0), cfg);
        // signal0 = 1, weight1 = clamp01(1 * 0.5) = 0.5, signal1 = 1 * 0.5, weight[1] = 0.5.
        let expected = 1.0 + 0.5 * 0.5;
        assert!((ridged.get_2d(0.0, 0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_stops_when_weight_vanishes() {
        let mut cfg = FractalConfig::default();
        cfg.set_octave_count(8.0).unwrap();
        // |source| == offset, so the first signal is zero and every later weight is zero.
        let ridged = RidgedMultiFractal::with_config(Constant::new(1.0), cfg);
        assert_eq!(ridged.get_3d(1.0, 2.0, 3.0), 0.0);
    }

    #[test]
    fn test_non_negative() {
        let ridged = RidgedMultiFractal::new(Perlin::new());
        for i in 0..200 {
            let t = i as f32 * 0.0913 - 9.0;
            assert!(ridged.get_3d(t, t * 0.7, -t) >= 0.0);
        }
    }
}
