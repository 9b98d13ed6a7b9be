//! Render-job settings with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vesta_noise::{MAX_OCTAVES, NoiseQuality};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform config directory for Vesta, e.g. `~/.config/vesta` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vesta"))
}

/// Top-level render-job configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map size and projection.
    pub map: MapConfig,
    /// Terrain graph parameters.
    pub terrain: TerrainConfig,
    /// Files to write.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Map size and the surface the builder sweeps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Map width in cells.
    pub width: u32,
    /// Map height in cells.
    pub height: u32,
    /// Surface and bounds to sample.
    pub projection: Projection,
}

/// Which builder produces the noise map, with its bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Projection {
    /// Rectangle of the `y = 0` plane.
    Plane {
        lower_x: f32,
        upper_x: f32,
        lower_z: f32,
        upper_z: f32,
        seamless: bool,
    },
    /// Latitude/longitude region of the unit sphere, in degrees.
    Sphere {
        south: f32,
        north: f32,
        west: f32,
        east: f32,
    },
    /// Angle (degrees) and height region of the unit cylinder.
    Cylinder {
        lower_angle: f32,
        upper_angle: f32,
        lower_height: f32,
        upper_height: f32,
    },
}

/// Fractal filter used for the base terrain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FractalKind {
    #[default]
    Sum,
    Billow,
    Ridged,
    Multi,
    Hybrid,
    Heterogeneous,
    Sin,
}

/// Terrain graph parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed for the base primitive; turbulence uses the following seeds.
    pub seed: i32,
    /// Interpolation quality of the base primitive.
    pub quality: NoiseQuality,
    /// Fractal filter over the primitive.
    pub fractal: FractalKind,
    /// Frequency of the first octave.
    pub frequency: f32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Number of octaves; the fractional part adds a partial octave.
    pub octave_count: f32,
    /// Spectral exponent; `None` keeps the filter's own default.
    pub exponent: Option<f32>,
    /// Number of evenly spaced terrace levels (0 = off).
    pub terraces: u32,
    /// Turbulence displacement power (0 = off).
    pub turbulence_power: f32,
    /// Octaves of the turbulence distortion.
    pub turbulence_roughness: u32,
}

/// Preset color gradient for the color image.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Terrain,
    Grayscale,
}

/// File format of the color image.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Bmp,
}

impl ImageFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
        }
    }
}

/// Raw heightmap output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeightmapFormat {
    None,
    Raw8,
    #[default]
    Raw16,
    Raw32,
}

/// Output files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the files are written to; created if missing.
    pub directory: PathBuf,
    /// Base file name, without extension.
    pub name: String,
    /// Write a gradient-colored image.
    pub color_image: bool,
    /// Format of the color image.
    pub image_format: ImageFormat,
    /// Gradient for the color image.
    pub gradient: GradientKind,
    /// Raw heightmap format.
    pub heightmap: HeightmapFormat,
    /// Stretch the heightmap to the map's own value range instead of [-1, 1].
    pub exact_fit: bool,
    /// Write a tangent-space normal map.
    pub normal_map: bool,
    /// Height scale for the normal map.
    pub bump_height: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "vesta_map=debug").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 256,
            projection: Projection::default(),
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::Plane {
            lower_x: 0.0,
            upper_x: 4.0,
            lower_z: 0.0,
            upper_z: 2.0,
            seamless: false,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            quality: NoiseQuality::Standard,
            fractal: FractalKind::Sum,
            frequency: 1.0,
            lacunarity: 2.0,
            octave_count: 6.0,
            exponent: None,
            terraces: 0,
            turbulence_power: 0.0,
            turbulence_roughness: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            name: "terrain".to_string(),
            color_image: true,
            image_format: ImageFormat::Png,
            gradient: GradientKind::Terrain,
            heightmap: HeightmapFormat::Raw16,
            exact_fit: false,
            normal_map: false,
            bump_height: 1.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_range(field: &'static str, lower: f32, upper: f32) -> Result<(), ConfigError> {
    if !(lower < upper) {
        return Err(invalid(
            field,
            format!("lower bound {lower} must be less than upper bound {upper}"),
        ));
    }
    Ok(())
}

impl Config {
    /// Check the settings a render job cannot run without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width == 0 || self.map.height == 0 {
            return Err(invalid(
                "map size",
                format!("{}x{} has no cells", self.map.width, self.map.height),
            ));
        }

        match self.map.projection {
            Projection::Plane {
                lower_x,
                upper_x,
                lower_z,
                upper_z,
                ..
            } => {
                check_range("plane x bounds", lower_x, upper_x)?;
                check_range("plane z bounds", lower_z, upper_z)?;
            }
            Projection::Sphere {
                south,
                north,
                west,
                east,
            } => {
                check_range("sphere latitude bounds", south, north)?;
                check_range("sphere longitude bounds", west, east)?;
            }
            Projection::Cylinder {
                lower_angle,
                upper_angle,
                lower_height,
                upper_height,
            } => {
                check_range("cylinder angle bounds", lower_angle, upper_angle)?;
                check_range("cylinder height bounds", lower_height, upper_height)?;
            }
        }

        let octaves = self.terrain.octave_count;
        if !(1.0..=MAX_OCTAVES as f32).contains(&octaves) {
            return Err(invalid(
                "octave_count",
                format!("{octaves} is outside 1..={MAX_OCTAVES}"),
            ));
        }
        if self.terrain.terraces == 1 {
            return Err(invalid("terraces", "use 0 to disable or at least 2 levels"));
        }
        if !(self.terrain.turbulence_power >= 0.0) {
            return Err(invalid("turbulence_power", "must not be negative"));
        }
        if self.terrain.turbulence_power > 0.0
            && !(1..=MAX_OCTAVES).contains(&(self.terrain.turbulence_roughness as usize))
        {
            return Err(invalid(
                "turbulence_roughness",
                format!("must be within 1..={MAX_OCTAVES}"),
            ));
        }
        if !(self.output.bump_height > 0.0) {
            return Err(invalid("bump_height", "must be positive"));
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let write_error = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(write_error)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 512"));
        assert!(ron_str.contains("quality: standard"));
        assert!(ron_str.contains("heightmap: raw16"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.map.projection = Projection::Sphere {
            south: -60.0,
            north: 60.0,
            west: -120.0,
            east: 120.0,
        };
        config.terrain.fractal = FractalKind::Ridged;
        config.terrain.exponent = Some(1.1);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `output` section entirely
        let ron_str = "(map: (width: 64), terrain: (fractal: billow), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.map.width, 64);
        assert_eq!(config.map.height, 256);
        assert_eq!(config.terrain.fractal, FractalKind::Billow);
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true, terrain: (erosion: 3))";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_projection_variants_parse() {
        let ron_str = "(map: (projection: Cylinder(lower_angle: -90.0, upper_angle: 90.0, \
                       lower_height: 0.0, upper_height: 4.0)))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert!(matches!(
            config.map.projection,
            Projection::Cylinder { upper_height, .. } if upper_height == 4.0
        ));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = Config::default();
        config.map.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "map size", .. })
        ));

        let mut config = Config::default();
        config.terrain.octave_count = 31.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "octave_count", .. })
        ));

        let mut config = Config::default();
        config.map.projection = Projection::Sphere {
            south: 10.0,
            north: -10.0,
            west: -180.0,
            east: 180.0,
        };
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.terrain.terraces = 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.bump_height = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.map.width = 1024;
        config.terrain.seed = 42;
        config.output.directory = PathBuf::from("renders");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("nested");
        let config = Config::load_or_create(&config_dir).unwrap();
        assert_eq!(config, Config::default());
        assert!(config_dir.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.terrain.octave_count = 8.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.terrain.octave_count), Some(8.0));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// Render job\n(\n  // Defaults for everything\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
