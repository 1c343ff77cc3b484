//! Error types for karmatic-core

use thiserror::Error;

/// Result type alias using karmatic-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in karmatic-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Object storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database (record insert) error
    #[error("Database error: {0}")]
    Database(String),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Site configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
