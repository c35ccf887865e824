// src/utils/error.rs
use thiserror::Error;

// Errors raised while talking to EDGAR or preparing a request
#[derive(Error, Debug)]
pub enum EdgarError {
    #[error("Configuration error: {0}")]
    Configuration(String), // Missing organization/email, bad header values

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error {status} for URL: {url}")]
    Http {
        status: reqwest::StatusCode, // e.g., 404 Not Found, 403 Forbidden
        url: String,
    },

    #[error("Could not find CIK for ticker {0}")]
    NotFound(String),

    #[error("Malformed EDGAR response: {0}")]
    MalformedResponse(String),
}

impl EdgarError {
    /// True for failures of the HTTP exchange itself (network errors and non-2xx statuses).
    pub fn is_transport(&self) -> bool {
        matches!(self, EdgarError::Network(_) | EdgarError::Http { .. })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("EDGAR interaction failed: {0}")]
    Edgar(#[from] EdgarError), // Automatically convert Edgar errors

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}
