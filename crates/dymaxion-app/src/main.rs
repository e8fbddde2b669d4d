//! The `dymaxion` binary: builds a grid from configuration and logs a report
//! of its geometry and downsampling pyramid.

mod platform;
mod report;

use clap::Parser;
use dymaxion_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    let dirs = match platform::PlatformDirs::resolve_and_create(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to initialize platform directories: {e}");
            std::process::exit(1);
        }
    };

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", dirs.config_dir.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    dymaxion_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(config_dir = %dirs.config_dir.display(), "Dymaxion grid");

    let Ok(side) = i32::try_from(config.grid.vertices_per_square_side) else {
        tracing::error!("vertices_per_square_side does not fit in i32");
        std::process::exit(1);
    };
    if let Err(e) = report::run(&config, side) {
        tracing::error!("Grid report failed: {e}");
        std::process::exit(1);
    }
}
