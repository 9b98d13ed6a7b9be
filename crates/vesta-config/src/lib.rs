//! Configuration for Vesta render jobs.
//!
//! A render job describes one terrain graph, the map to sweep it over and the
//! files to write. Settings persist to disk as RON, accept CLI overrides via
//! clap, and stay forward/backward compatible: missing sections fall back to
//! defaults and unknown fields are ignored.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, FractalKind, GradientKind, HeightmapFormat, ImageFormat,
    MapConfig, OutputConfig, Projection, TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
