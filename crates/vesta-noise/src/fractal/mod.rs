//! Fractal filters: layer several octaves of a primitive into one signal.
//!
//! Every filter scales the input point by `frequency` once on entry, samples
//! the primitive, folds the sample into a running value with its own formula,
//! then scales the point by `lacunarity` before the next octave. Octave `n` is
//! weighted by `lacunarity^(-n * exponent)`. The loop runs `floor(octave_count)`
//! times; a fractional remainder adds one partially weighted octave at the end.

mod billow;
mod heterogeneous;
mod hybrid;
mod multi;
mod pipe;
mod ridged;
mod sin;
mod sum;

pub use billow::Billow;
pub use heterogeneous::HeterogeneousMultiFractal;
pub use hybrid::HybridMultiFractal;
pub use multi::MultiFractal;
pub use pipe::Pipe;
pub use ridged::RidgedMultiFractal;
pub use sin::SinFractal;
pub use sum::SumFractal;

use crate::error::NoiseError;

/// Highest octave count a filter accepts.
pub const MAX_OCTAVES: usize = 30;

/// Per-octave amplitude table for a `(lacunarity, exponent)` pair.
///
/// Entry `n` is `lacunarity^(-n * exponent)`, evaluated in double precision.
/// The table holds one extra entry for the fractional remainder octave.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralWeights {
    lacunarity: f32,
    exponent: f32,
    weights: [f32; MAX_OCTAVES + 1],
}

impl SpectralWeights {
    pub fn new(lacunarity: f32, exponent: f32) -> Self {
        let mut weights = [0.0; MAX_OCTAVES + 1];
        for (octave, weight) in weights.iter_mut().enumerate() {
            let power = -(octave as f32) * exponent;
            *weight = libm::pow(f64::from(lacunarity), f64::from(power)) as f32;
        }
        Self {
            lacunarity,
            exponent,
            weights,
        }
    }

    pub fn lacunarity(&self) -> f32 {
        self.lacunarity
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Amplitude of `octave`. Indices past the table clamp to the last entry.
    #[inline]
    pub fn weight(&self, octave: usize) -> f32 {
        self.weights[octave.min(MAX_OCTAVES)]
    }
}

/// Parameters shared by every fractal filter.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalConfig {
    frequency: f32,
    octave_count: f32,
    offset: f32,
    gain: f32,
    weights: SpectralWeights,
}

impl FractalConfig {
    pub const DEFAULT_FREQUENCY: f32 = 1.0;
    pub const DEFAULT_LACUNARITY: f32 = 2.0;
    pub const DEFAULT_OCTAVE_COUNT: f32 = 6.0;
    pub const DEFAULT_OFFSET: f32 = 1.0;
    pub const DEFAULT_GAIN: f32 = 2.0;
    pub const DEFAULT_EXPONENT: f32 = 0.9;

    /// Defaults tuned for [`HybridMultiFractal`]: gain 1, offset 0.7, exponent 0.25.
    pub fn hybrid() -> Self {
        let mut config = Self::default();
        config.gain = 1.0;
        config.offset = 0.7;
        config.set_exponent(0.25);
        config
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn lacunarity(&self) -> f32 {
        self.weights.lacunarity()
    }

    /// Recomputes the spectral weights.
    pub fn set_lacunarity(&mut self, lacunarity: f32) {
        self.weights = SpectralWeights::new(lacunarity, self.weights.exponent());
    }

    pub fn exponent(&self) -> f32 {
        self.weights.exponent()
    }

    /// Recomputes the spectral weights.
    pub fn set_exponent(&mut self, exponent: f32) {
        self.weights = SpectralWeights::new(self.weights.lacunarity(), exponent);
    }

    pub fn octave_count(&self) -> f32 {
        self.octave_count
    }

    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidOctaveCount`] unless `1 <= octave_count <= MAX_OCTAVES`.
    pub fn set_octave_count(&mut self, octave_count: f32) -> Result<(), NoiseError> {
        if !(1.0..=MAX_OCTAVES as f32).contains(&octave_count) {
            return Err(NoiseError::InvalidOctaveCount(octave_count));
        }
        self.octave_count = octave_count;
        Ok(())
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    pub fn weights(&self) -> &SpectralWeights {
        &self.weights
    }

    /// Whole octaves to loop over and the fractional remainder.
    #[inline]
    pub(crate) fn octaves(&self) -> (usize, f32) {
        let whole = self.octave_count as usize;
        (whole, self.octave_count - whole as f32)
    }

    #[inline]
    pub(crate) fn weight(&self, octave: usize) -> f32 {
        self.weights.weight(octave)
    }
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            frequency: Self::DEFAULT_FREQUENCY,
            octave_count: Self::DEFAULT_OCTAVE_COUNT,
            offset: Self::DEFAULT_OFFSET,
            gain: Self::DEFAULT_GAIN,
            weights: SpectralWeights::new(Self::DEFAULT_LACUNARITY, Self::DEFAULT_EXPONENT),
        }
    }
}

#[inline]
pub(crate) fn scale<const N: usize>(point: &mut [f32; N], factor: f32) {
    for c in point.iter_mut() {
        *c *= factor;
    }
}

/// Accessors shared by every filter, plus the four dimensional impls that
/// forward to the filter's `evaluate` with the matching primitive method.
macro_rules! impl_fractal_filter {
    ($ty:ident) => {
        impl<P> $ty<P> {
            pub fn config(&self) -> &$crate::fractal::FractalConfig {
                &self.config
            }

            pub fn config_mut(&mut self) -> &mut $crate::fractal::FractalConfig {
                &mut self.config
            }

            pub fn source(&self) -> &P {
                &self.source
            }

            pub fn source_mut(&mut self) -> &mut P {
                &mut self.source
            }

            pub fn set_source(&mut self, source: P) {
                self.source = source;
            }
        }

        impl<P: $crate::module::Module1D> $crate::module::Module1D for $ty<P> {
            fn get_1d(&self, x: f32) -> f32 {
                self.evaluate([x], |[x]| self.source.get_1d(x))
            }
        }

        impl<P: $crate::module::Module2D> $crate::module::Module2D for $ty<P> {
            fn get_2d(&self, x: f32, y: f32) -> f32 {
                self.evaluate([x, y], |[x, y]| self.source.get_2d(x, y))
            }
        }

        impl<P: $crate::module::Module3D> $crate::module::Module3D for $ty<P> {
            fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
                self.evaluate([x, y, z], |[x, y, z]| self.source.get_3d(x, y, z))
            }
        }

        impl<P: $crate::module::Module4D> $crate::module::Module4D for $ty<P> {
            fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
                self.evaluate([x, y, z, t], |[x, y, z, t]| {
                    self.source.get_4d(x, y, z, t)
                })
            }
        }
    };
}

pub(crate) use impl_fractal_filter;
