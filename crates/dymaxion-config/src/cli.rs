//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Dymaxion grid command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "dymaxion", about = "Dymaxion discrete global grid")]
pub struct CliArgs {
    /// Sphere radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Vertices per square side.
    #[arg(long)]
    pub side: Option<u32>,

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
        if let Some(radius) = args.radius {
            self.grid.radius = radius;
        }
        if let Some(side) = args.side {
            self.grid.vertices_per_square_side = side;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
