//! Error types for transcript ingestion
//!
//! Parsing itself never fails: malformed lines are skipped. Errors only
//! arise at the edges, when reading a transcript from disk or when a
//! caller names a format that does not exist.

use std::path::PathBuf;

/// Errors raised while loading transcripts
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Format name not recognised
    #[error("unknown transcript format: '{0}'")]
    UnknownFormat(String),
}

impl TranscriptError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for transcript operations
pub type TranscriptResult<T> = Result<T, TranscriptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_display() {
        let err = TranscriptError::UnknownFormat("srt".to_string());
        assert_eq!(err.to_string(), "unknown transcript format: 'srt'");
    }

    #[test]
    fn io_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = TranscriptError::io_error("/tmp/meeting.vtt", source);
        assert!(err.to_string().contains("/tmp/meeting.vtt"));
        assert!(err.to_string().contains("missing"));
    }
}
