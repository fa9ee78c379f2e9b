use std::io;

use thiserror::Error;

/// Library-wide error type for membank operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// HTTP transport failure while fetching a resource.
    #[error("Request to {url} failed: {details}")]
    Http { url: String, details: String },

    /// Remote server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Interactive prompt could not be read.
    #[error("Failed to read prompt answer: {0}")]
    Prompt(String),

    /// No home directory could be resolved for the current user.
    #[error("Could not determine a home directory for the current user")]
    HomeDirUnavailable,

    /// Template rendering failed.
    #[error("Failed to render {what}: {details}")]
    Template { what: String, details: String },

    /// Report serialization failed.
    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
