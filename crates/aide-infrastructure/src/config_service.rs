//! Loads `aide.toml`.

use crate::paths::AidePaths;
use aide_core::Result;
use aide_core::config::AideConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigService;

impl ConfigService {
    /// Loads the configuration from `path`, or from the platform default
    /// location when `path` is `None`.
    ///
    /// Never fails: a missing file yields the defaults, and an unreadable or
    /// invalid one yields the defaults after a warning.
    pub fn load(path: Option<&Path>) -> AideConfig {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match AidePaths::config_file() {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!("[Config] {}; using defaults", e);
                    return AideConfig::default();
                }
            },
        };

        match Self::read(&path) {
            Ok(Some(config)) => {
                tracing::debug!("[Config] Loaded {}", path.display());
                config
            }
            Ok(None) => AideConfig::default(),
            Err(e) => {
                tracing::warn!(
                    "[Config] Ignoring {}: {}; using defaults",
                    path.display(),
                    e
                );
                AideConfig::default()
            }
        }
    }

    /// Reads and validates one config file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(config))`: File parsed and validated
    /// - `Ok(None)`: File does not exist
    /// - `Err(_)`: File unreadable, malformed or out of range
    pub fn read(path: &Path) -> Result<Option<AideConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        AideConfig::from_toml_str(&content).map(Some)
    }

    /// Data directory in effect for `config`.
    pub fn data_dir(config: &AideConfig) -> Result<PathBuf> {
        match &config.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(AidePaths::data_dir()?),
        }
    }
}
