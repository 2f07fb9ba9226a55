//! Error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the persistence layer.
///
/// Every variant carrying a path also carries the underlying io error; the
/// caller decides how much of it to show the user. Storage failures are
/// never swallowed here — a lost progress write would break the "resume
/// where I left off" guarantee.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record that was expected to exist was not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
