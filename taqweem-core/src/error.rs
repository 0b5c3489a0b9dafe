//! Error types for taqweem.

use thiserror::Error;

/// Errors that can occur in taqweem operations.
#[derive(Error, Debug)]
pub enum TaqweemError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Year {0} has no events")]
    UnknownYear(i32),

    #[error("Invalid theme '{0}'. Expected \"light\" or \"dark\"")]
    InvalidTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TaqweemError {
    fn from(err: serde_json::Error) -> Self {
        TaqweemError::Serialization(err.to_string())
    }
}

/// Result type alias for taqweem operations.
pub type TaqweemResult<T> = Result<T, TaqweemError>;
