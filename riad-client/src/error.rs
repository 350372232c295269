//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No valid admin session
    #[error("Authentication required")]
    Unauthorized,

    /// Too many login attempts
    #[error("Too many requests, try again later")]
    RateLimited,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<shared::AppError> for ClientError {
    fn from(err: shared::AppError) -> Self {
        ClientError::Internal(err.message)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
