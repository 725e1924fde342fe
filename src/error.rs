//! Error types for the fileinfo result model.
//!
//! Absence of data is never an error in this crate: it is carried
//! structurally by `Option` fields and empty strings. The variants below only
//! cover the few operations that can genuinely fail, namely loading
//! configuration and moving the aggregate through JSON.

use thiserror::Error;

/// Main error type for fileinfo operations.
#[derive(Debug, Error)]
pub enum FileInfoError {
    /// Configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input data handed over by a collaborator
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for fileinfo operations
pub type Result<T> = std::result::Result<T, FileInfoError>;
