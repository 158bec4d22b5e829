//! Error types for the Punchcard API client

use thiserror::Error;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur talking to the Punchcard server
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, request timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the server
    #[error("Server returned {code}: {message}")]
    Status { code: u16, message: String },

    /// The server processed the request and declined it (wrong PIN,
    /// unknown employee, already clocked in)
    #[error("Request denied: {0}")]
    Denied(String),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
