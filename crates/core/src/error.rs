//! Error types for corpus ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vocabulary construction and corpus streaming.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// A dictionary line that is not `kind count word`
    #[error("Malformed dictionary line {line} in {path}: {reason} ({content:?})")]
    MalformedDictionary {
        path: PathBuf,
        line: usize,
        content: String,
        reason: String,
    },

    /// A document-boundary line that is not `marker\tid\ttitle`
    #[error("Malformed document marker at line {line} in {path}: {reason} ({content:?})")]
    MalformedDocument {
        path: PathBuf,
        line: usize,
        content: String,
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CorpusError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
