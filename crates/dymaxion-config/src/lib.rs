//! Configuration for the dymaxion grid tools.
//!
//! Settings persist to disk as a RON file, tolerate missing and unknown
//! fields, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GridConfig, PyramidConfig};
pub use error::ConfigError;
