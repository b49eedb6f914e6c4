//! Error types for the drive_fetch crate.

use thiserror::Error;

/// Errors that can occur when fetching data from an API endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: status {status} - {status_text}")]
    Status { status: u16, status_text: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response body as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
