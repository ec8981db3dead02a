//! Unified application error types
//!
//! Provides a single error type for the command layer, serializable as an
//! `{code, message}` payload for whatever front end drives the commands.

use serde::Serialize;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Local persistence error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Recipe API error
    #[error("Recipe API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation needs a logged-in user
    #[error("Not logged in")]
    NotLoggedIn,

    /// Rejected user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lock error when accessing shared state
    #[error("State lock error")]
    LockError,
}

/// Serializable error payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Stable code for client-side handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(StorageError::InvalidInput(_)) | Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Api(_) => "API_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::LockError => "LOCK_ERROR",
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let message = match err {
            AppError::Storage(StorageError::InvalidInput(msg))
            | AppError::InvalidInput(msg)
            | AppError::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        };
        Self {
            code: err.code().to_string(),
            message,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}
