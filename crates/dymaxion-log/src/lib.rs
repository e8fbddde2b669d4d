//! Logging setup for the dymaxion tools.
//!
//! Installs a `tracing` subscriber with console output, optional JSON file
//! output in debug builds, and a level filter taken from `RUST_LOG` or the
//! configuration. Records emitted through the `log` facade by the library
//! crates are bridged into the same subscriber.

use std::path::Path;

use dymaxion_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "dymaxion.log";

const DEFAULT_FILTER: &str = "info";

/// The filter string used when neither `RUST_LOG` nor the config sets one.
fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - whether to also write [`LOG_FILE_NAME`] into `log_dir`
/// * `config` - source of the `debug.log_level` filter; `RUST_LOG` wins over it
///
/// Calling this more than once panics, as installing a second global
/// subscriber does.
///
/// # Examples
///
/// ```no_run
/// use dymaxion_config::Config;
/// use dymaxion_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_string(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_file) = open_log_file(log_dir, debug_build) {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The JSON log file, created (truncated) only for debug builds with a log
/// directory that exists or can be created.
fn open_log_file(log_dir: Option<&Path>, debug_build: bool) -> Option<std::fs::File> {
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
    {
        std::fs::File::create(log_dir.join(LOG_FILE_NAME)).ok()
    } else {
        None
    }
}

/// An `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
