//! Error types for Studiobook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Studiobook operations.
pub type Result<T> = std::result::Result<T, StudioError>;

/// Core error type for Studiobook operations.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Durable storage read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Record list could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        StudioError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(err: serde_json::Error) -> Self {
        StudioError::Serialization(err.to_string())
    }
}
