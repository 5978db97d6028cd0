use aide_core::AideError;

/// Errors raised by the storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// File locking error.
    Lock(String),
    /// Key contains characters that cannot be used in a file name.
    InvalidKey(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Json(e) => write!(f, "JSON error: {}", e),
            StorageError::Lock(e) => write!(f, "Lock error: {}", e),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: '{}'", key),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

impl From<StorageError> for AideError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(io) => io.into(),
            StorageError::Json(json) => json.into(),
            StorageError::Lock(message) => AideError::persistence(message),
            StorageError::InvalidKey(key) => {
                AideError::invalid_argument(format!("Invalid storage key: '{}'", key))
            }
        }
    }
}
