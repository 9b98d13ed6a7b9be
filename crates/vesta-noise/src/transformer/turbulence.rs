use crate::error::NoiseError;
use crate::fractal::{FractalConfig, SumFractal};
use crate::module::Module3D;
use crate::primitive::Perlin;
use crate::quality::NoiseQuality;

/// Distortion module built by [`Turbulence::with_perlin`].
pub type PerlinDistortion = SumFractal<Perlin>;

// Offsets keep the three distortion samples uncorrelated with each other and
// with the source, so their zero crossings do not line up.
const X_OFFSET: [f32; 3] = [12414.0 / 65536.0, 65124.0 / 65536.0, 31337.0 / 65536.0];
const Y_OFFSET: [f32; 3] = [26519.0 / 65536.0, 18128.0 / 65536.0, 60493.0 / 65536.0];
const Z_OFFSET: [f32; 3] = [53820.0 / 65536.0, 11213.0 / 65536.0, 44845.0 / 65536.0];

/// Randomly perturbs the input point using three distortion modules.
///
/// Each axis moves by `power * distort(p + offset)` where the offsets are
/// fixed per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Turbulence<S, D = PerlinDistortion> {
    source: S,
    x_distort: D,
    y_distort: D,
    z_distort: D,
    power: f32,
}

impl<S, D> Turbulence<S, D> {
    pub const DEFAULT_POWER: f32 = 1.0;

    pub fn new(source: S, x_distort: D, y_distort: D, z_distort: D) -> Self {
        Self {
            source,
            x_distort,
            y_distort,
            z_distort,
            power: Self::DEFAULT_POWER,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    /// Scale of the coordinate perturbation.
    pub fn set_power(&mut self, power: f32) {
        self.power = power;
    }
}

impl<S> Turbulence<S, PerlinDistortion> {
    /// Turbulence driven by fractal Perlin noise with seeds `seed`, `seed + 1`
    /// and `seed + 2`. `roughness` is the octave count of the distortion.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidOctaveCount`] for a roughness outside `1..=30`.
    pub fn with_perlin(
        source: S,
        seed: i32,
        frequency: f32,
        power: f32,
        roughness: f32,
    ) -> Result<Self, NoiseError> {
        let mut config = FractalConfig::default();
        config.set_frequency(frequency);
        config.set_octave_count(roughness)?;

        let distortion = |offset: i32| {
            let perlin = Perlin::with_seed(seed.wrapping_add(offset), NoiseQuality::Standard);
            SumFractal::with_config(perlin, config.clone())
        };

        let mut turbulence = Self::new(source, distortion(0), distortion(1), distortion(2));
        turbulence.set_power(power);
        Ok(turbulence)
    }
}

impl<S: Module3D, D: Module3D> Module3D for Turbulence<S, D> {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let sample = |module: &D, [ox, oy, oz]: [f32; 3]| module.get_3d(x + ox, y + oy, z + oz);

        let dx = x + sample(&self.x_distort, X_OFFSET) * self.power;
        let dy = y + sample(&self.y_distort, Y_OFFSET) * self.power;
        let dz = z + sample(&self.z_distort, Z_OFFSET) * self.power;
        self.source.get_3d(dx, dy, dz)
    }
}
