//! Runs one render job: sweep the terrain graph over a map, then render and
//! write every requested output.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use vesta_config::{Config, GradientKind, HeightmapFormat, ImageFormat, Projection};
use vesta_map::{
    ColorGradient, CylinderBuilder, DataMap, Elevation, HeightmapRenderer, Image, ImageRenderer,
    MapError, NoiseMap, NormalMapRenderer, PlaneBuilder, RawSample, SphereBuilder, write_bmp,
    write_png, write_raw_heightmap,
};
use vesta_noise::{Module3D, NoiseError};

use crate::terrain::build_terrain;

/// Errors that abort a render job.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error(transparent)]
    Config(#[from] vesta_config::ConfigError),

    #[error("failed to build terrain graph: {0}")]
    Noise(#[from] NoiseError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sweep `source` over the configured projection.
pub fn build_map<M>(config: &Config, source: &M) -> Result<NoiseMap, MapError>
where
    M: Module3D + ?Sized,
{
    let (width, height) = (config.map.width as usize, config.map.height as usize);
    let progress = |row: usize| {
        if (row + 1) % 64 == 0 || row + 1 == height {
            debug!("Built {}/{height} rows", row + 1);
        }
    };

    let mut map = NoiseMap::new();
    match config.map.projection {
        Projection::Plane {
            lower_x,
            upper_x,
            lower_z,
            upper_z,
            seamless,
        } => {
            let mut builder = PlaneBuilder::new(width, height);
            builder.set_bounds(lower_x, upper_x, lower_z, upper_z)?;
            builder.set_seamless(seamless);
            builder.build_with_progress(source, &mut map, progress)?;
        }
        Projection::Sphere {
            south,
            north,
            west,
            east,
        } => {
            let mut builder = SphereBuilder::new(width, height);
            builder.set_bounds(south, north, west, east)?;
            builder.build_with_progress(source, &mut map, progress)?;
        }
        Projection::Cylinder {
            lower_angle,
            upper_angle,
            lower_height,
            upper_height,
        } => {
            let mut builder = CylinderBuilder::new(width, height);
            builder.set_bounds(lower_angle, upper_angle, lower_height, upper_height)?;
            builder.build_with_progress(source, &mut map, progress)?;
        }
    }
    Ok(map)
}

fn render_heightmap<T>(
    config: &Config,
    map: &NoiseMap,
    path: PathBuf,
) -> Result<PathBuf, MapError>
where
    T: Elevation + RawSample,
{
    let mut renderer = HeightmapRenderer::<T>::new();
    if config.output.exact_fit {
        renderer.exact_fit(map)?;
    }
    renderer.set_wrap(is_seamless(config));

    let mut heightmap = DataMap::<T>::new();
    renderer.render(map, &mut heightmap)?;
    write_raw_heightmap(&heightmap, &path)?;
    Ok(path)
}

fn is_seamless(config: &Config) -> bool {
    matches!(
        config.map.projection,
        Projection::Plane { seamless: true, .. }
    )
}

fn write_image(format: ImageFormat, image: &Image, path: &Path) -> Result<(), MapError> {
    match format {
        ImageFormat::Png => write_png(image, path),
        ImageFormat::Bmp => write_bmp(image, path),
    }
}

/// Build the terrain, render it and write the configured outputs. Returns the
/// paths written.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, JobError> {
    config.validate()?;

    let graph = build_terrain(&config.terrain)?;
    info!(
        "Building {}x{} map ({:?} fractal, seed {})",
        config.map.width, config.map.height, config.terrain.fractal, config.terrain.seed
    );
    let map = build_map(config, graph.as_ref())?;
    if let Some((min, max)) = map.min_max() {
        info!("Noise range {min:.4}..{max:.4}");
    }

    let output = &config.output;
    std::fs::create_dir_all(&output.directory).map_err(|source| JobError::OutputDir {
        path: output.directory.clone(),
        source,
    })?;
    let file = |suffix: &str, extension: &str| {
        output
            .directory
            .join(format!("{}{suffix}.{extension}", output.name))
    };

    let mut written = Vec::new();

    if output.color_image {
        let gradient = match output.gradient {
            GradientKind::Terrain => ColorGradient::terrain(),
            GradientKind::Grayscale => ColorGradient::grayscale(),
        };
        let mut image = Image::new();
        ImageRenderer::new(gradient).render(&map, &mut image)?;
        let path = file("", output.image_format.extension());
        write_image(output.image_format, &image, &path)?;
        written.push(path);
    }

    let heightmap = match output.heightmap {
        HeightmapFormat::None => None,
        HeightmapFormat::Raw8 => Some(render_heightmap::<u8>(config, &map, file("", "r8"))?),
        HeightmapFormat::Raw16 => Some(render_heightmap::<u16>(config, &map, file("", "r16"))?),
        HeightmapFormat::Raw32 => Some(render_heightmap::<f32>(config, &map, file("", "r32"))?),
    };
    written.extend(heightmap);

    if output.normal_map {
        let mut renderer = NormalMapRenderer::new();
        renderer.set_bump_height(output.bump_height);
        renderer.set_wrap(is_seamless(config));
        let mut normals = Image::new();
        renderer.render(&map, &mut normals)?;
        let path = file("_normal", output.image_format.extension());
        write_image(output.image_format, &normals, &path)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesta_config::FractalKind;

    fn small_config(dir: &Path) -> Config {
        let mut config = Config::default();
        config.map.width = 32;
        config.map.height = 16;
        config.output.directory = dir.join("out");
        config
    }

    #[test]
    fn test_default_job_writes_image_and_heightmap() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());

        let written = run(&config).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["terrain.png", "terrain.r16"]);
        assert_eq!(std::fs::metadata(&written[1]).unwrap().len(), 32 * 16 * 2);
    }

    #[test]
    fn test_every_output_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.map.projection = Projection::Sphere {
            south: -90.0,
            north: 90.0,
            west: -180.0,
            east: 180.0,
        };
        config.terrain.fractal = FractalKind::Ridged;
        config.output.image_format = ImageFormat::Bmp;
        config.output.heightmap = HeightmapFormat::Raw8;
        config.output.exact_fit = true;
        config.output.normal_map = true;

        let written = run(&config).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));
        assert!(written[2].ends_with("terrain_normal.bmp"));
    }

    #[test]
    fn test_invalid_config_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.map.height = 0;

        assert!(matches!(run(&config), Err(JobError::Config(_))));
        assert!(!config.output.directory.exists());
    }

    #[test]
    fn test_build_map_uses_projection_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.map.projection = Projection::Cylinder {
            lower_angle: 0.0,
            upper_angle: 90.0,
            lower_height: -1.0,
            upper_height: 1.0,
        };
        let map = build_map(&config, &vesta_noise::Cylinders::new()).unwrap();
        assert_eq!((map.width(), map.height()), (32, 16));
    }
}
