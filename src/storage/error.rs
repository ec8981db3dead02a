//! Storage module error types
//!
//! Provides error types for key-value persistence.

use thiserror::Error;

/// Storage operation error type
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Data serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lock error when accessing the store
    #[error("Storage lock error")]
    LockError,

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
