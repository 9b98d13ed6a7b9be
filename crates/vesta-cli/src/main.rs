//! `vesta`: render a coherent-noise terrain map to image and heightmap files.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p vesta-cli -- --width 1024 --height 512 --seed 7`.

mod job;
mod terrain;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use vesta_config::{CliArgs, Config, default_config_dir};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".vesta"));

    // Load or create config, then apply CLI overrides
    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    vesta_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    if let Some(e) = load_error {
        warn!("Failed to load config: {e}, using defaults");
    }

    match job::run(&config) {
        Ok(written) => {
            info!("Render complete, {} file(s) written", written.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Render failed: {e}");
            ExitCode::FAILURE
        }
    }
}
