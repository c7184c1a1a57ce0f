//! Error types for loading telemetry exports

use std::path::PathBuf;

/// Errors raised while loading usage events
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Export is not a JSON array of events
    #[error("invalid usage export: {0}")]
    Json(#[from] serde_json::Error),
}

impl UsageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for usage operations
pub type UsageResult<T> = Result<T, UsageError>;
