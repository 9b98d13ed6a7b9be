//! Builds the terrain module graph described by a [`TerrainConfig`].

use vesta_config::{FractalKind, TerrainConfig};
use vesta_noise::{
    Billow, FractalConfig, HeterogeneousMultiFractal, HybridMultiFractal, Module3D, MultiFractal,
    NoiseError, Perlin, RidgedMultiFractal, SinFractal, SumFractal, Terrace, Turbulence,
};

/// A terrain graph whose shape is only known at run time.
pub type TerrainGraph = Box<dyn Module3D>;

fn fractal_config(terrain: &TerrainConfig) -> Result<FractalConfig, NoiseError> {
    let mut config = match terrain.fractal {
        FractalKind::Hybrid => FractalConfig::hybrid(),
        _ => FractalConfig::default(),
    };
    config.set_frequency(terrain.frequency);
    config.set_lacunarity(terrain.lacunarity);
    config.set_octave_count(terrain.octave_count)?;
    if let Some(exponent) = terrain.exponent {
        config.set_exponent(exponent);
    }
    Ok(config)
}

/// Fractal over seeded Perlin noise, optionally terraced and then distorted by
/// turbulence.
pub fn build_terrain(terrain: &TerrainConfig) -> Result<TerrainGraph, NoiseError> {
    let perlin = Perlin::with_seed(terrain.seed, terrain.quality);
    let config = fractal_config(terrain)?;

    let mut graph: TerrainGraph = match terrain.fractal {
        FractalKind::Sum => Box::new(SumFractal::with_config(perlin, config)),
        FractalKind::Billow => Box::new(Billow::with_config(perlin, config)),
        FractalKind::Ridged => Box::new(RidgedMultiFractal::with_config(perlin, config)),
        FractalKind::Multi => Box::new(MultiFractal::with_config(perlin, config)),
        FractalKind::Hybrid => Box::new(HybridMultiFractal::with_config(perlin, config)),
        FractalKind::Heterogeneous => {
            Box::new(HeterogeneousMultiFractal::with_config(perlin, config))
        }
        FractalKind::Sin => Box::new(SinFractal::with_config(perlin, config)),
    };

    if terrain.terraces > 0 {
        graph = Box::new(Terrace::with_steps(graph, terrain.terraces as usize)?);
    }

    if terrain.turbulence_power > 0.0 {
        graph = Box::new(Turbulence::with_perlin(
            graph,
            terrain.seed.wrapping_add(1),
            terrain.frequency,
            terrain.turbulence_power,
            terrain.turbulence_roughness as f32,
        )?);
    }

    Ok(graph)
}
