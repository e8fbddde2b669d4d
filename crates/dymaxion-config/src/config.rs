//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Resolution and size of the grid.
    pub grid: GridConfig,
    /// Coarser levels derived from the grid by downsampling.
    pub pyramid: PyramidConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Sphere radius in world units.
    pub radius: f64,
    /// Vertices along each side of each of the ten squares.
    pub vertices_per_square_side: u32,
}

/// Downsampling pyramid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PyramidConfig {
    /// Side lengths of the coarse levels. Each must divide the grid's side.
    pub coarse_sides: Vec<u32>,
}

/// Debug and development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter string (e.g., "info", "debug", "dymaxion_grid=trace").
    pub log_level: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            vertices_per_square_side: 40,
        }
    }
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            coarse_sides: vec![20, 10, 5],
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

impl GridConfig {
    /// Check that the grid can be built from these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid.radius must be finite and positive, got {}",
                self.radius
            )));
        }
        let side = self.vertices_per_square_side;
        if side == 0 || i32::try_from(side).is_err() {
            return Err(ConfigError::Invalid(format!(
                "grid.vertices_per_square_side must be in 1..={}, got {side}",
                i32::MAX
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Validate every section that feeds grid construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        let side = self.grid.vertices_per_square_side;
        for &coarse in &self.pyramid.coarse_sides {
            if coarse == 0 || side % coarse != 0 {
                return Err(ConfigError::Invalid(format!(
                    "pyramid.coarse_sides entry {coarse} does not divide grid side {side}"
                )));
            }
        }
        Ok(())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
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
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })?;
        Ok(())
    }
}
