//! Platform directory resolution.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("the OS exposes no configuration directory; pass --config")]
    NoConfigDir,

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn create_dir(path: &Path) -> Result<(), PlatformError> {
    std::fs::create_dir_all(path).map_err(|source| PlatformError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the application keeps its files.
#[derive(Debug)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON log written by debug builds.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "dymaxion";

impl PlatformDirs {
    /// Resolve directories under the OS configuration directory, or under
    /// `config_override` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if no override is given and the
    /// OS does not expose a configuration directory.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, PlatformError> {
        match config_override {
            Some(dir) => Ok(Self::with_config_dir(dir.to_path_buf())),
            None => {
                let app_dir = dirs::config_dir()
                    .ok_or(PlatformError::NoConfigDir)?
                    .join(APP_NAME);
                Ok(Self::with_config_dir(app_dir))
            }
        }
    }

    fn with_config_dir(config_dir: PathBuf) -> Self {
        let log_dir = config_dir.join("logs");
        Self {
            config_dir,
            log_dir,
        }
    }

    /// Resolve directories and create them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if resolution or directory creation fails.
    pub fn resolve_and_create(config_override: Option<&Path>) -> Result<Self, PlatformError> {
        let dirs = Self::resolve(config_override)?;
        create_dir(&dirs.config_dir)?;
        create_dir(&dirs.log_dir)?;
        Ok(dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_used_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve(Some(tmp.path())).unwrap();
        assert_eq!(dirs.config_dir, tmp.path());
        assert_eq!(dirs.log_dir, tmp.path().join("logs"));
    }

    #[test]
    fn test_directory_creation() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("nested").join(APP_NAME);
        let dirs = PlatformDirs::resolve_and_create(Some(&root)).unwrap();
        assert!(dirs.config_dir.exists(), "config_dir was not created");
        assert!(dirs.log_dir.exists(), "log_dir was not created");
    }

    #[test]
    fn test_create_dir_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, "").unwrap();
        let blocked = file.join(APP_NAME);
        let err = PlatformDirs::resolve_and_create(Some(&blocked)).unwrap_err();
        assert!(matches!(&err, PlatformError::CreateDir { path, .. } if *path == blocked));
        assert!(err.to_string().contains("occupied"), "{err}");
    }

    #[test]
    fn test_no_config_dir_display() {
        assert_eq!(
            PlatformError::NoConfigDir.to_string(),
            "the OS exposes no configuration directory; pass --config"
        );
    }
}
