//! Error types for the AIDE application.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire AIDE application.
///
/// `InvalidArgument` and `QuotaExceeded` are meant to be shown to the user and
/// never alter state. `NotFound` is reserved for lookups where a miss is not an
/// expected outcome. Storage problems surface as `Persistence`.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum AideError {
    /// Bad enum value, malformed file type, out-of-range configuration.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Upload rate limit reached
    #[error("Upload limit reached ({limit} files per {window_hours} hours)")]
    QuotaExceeded { limit: u32, window_hours: i64 },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage read/write failure
    #[error("Persistence failure: {message}")]
    Persistence { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AideError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from the storage layer.
    ///
    /// Serialization and IO failures count: they only happen while reading or
    /// writing persisted records.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Persistence { .. } | Self::Serialization { .. } | Self::Io { .. }
        )
    }

    /// Whether the error is meant to be shown to the user verbatim.
    pub fn is_user_facing(&self) -> bool {
        self.is_invalid_argument() || self.is_quota_exceeded()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AideError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AideError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AideError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AideError>`.
pub type Result<T> = std::result::Result<T, AideError>;
