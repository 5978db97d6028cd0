//! Platform path resolution for aide files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/aide/               # Config directory
//! └── aide.toml                 # Application configuration
//!
//! ~/.local/share/aide/          # Data directory (overridable via `data_dir`)
//! ├── ai_assistant_auth.json    # Active named identity
//! └── ai_assistant_chats_*.json # Chat history per identity
//!
//! ~/Downloads/                  # Conversation exports
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "aide";
const CONFIG_FILE: &str = "aide.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform reports no directory of this kind.
    DirNotFound(&'static str),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DirNotFound(kind) => write!(f, "Cannot find {} directory", kind),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for aide_core::AideError {
    fn from(e: PathError) -> Self {
        aide_core::AideError::persistence(e.to_string())
    }
}

pub struct AidePaths;

impl AidePaths {
    /// `<platform config dir>/aide`
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or(PathError::DirNotFound("config"))
    }

    /// `<platform data dir>/aide`
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or(PathError::DirNotFound("data"))
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Where exports land: the download directory, else `<data dir>/exports`.
    pub fn export_dir() -> Result<PathBuf, PathError> {
        match dirs::download_dir() {
            Some(dir) => Ok(dir),
            None => Ok(Self::data_dir()?.join("exports")),
        }
    }
}
