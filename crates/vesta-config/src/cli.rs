//! Command-line argument parsing for the `vesta` renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render coherent-noise terrain maps to image and heightmap files.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "vesta", about = "Coherent noise terrain renderer")]
pub struct CliArgs {
    /// Map width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Map height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Terrain seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Fractal octave count (fractional values add a partial octave).
    #[arg(long)]
    pub octaves: Option<f32>,

    /// Output directory.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octave_count = octaves;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
