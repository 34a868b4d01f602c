//! Error module
//!

use thiserror::Error;

/// Custom error type for fetches, allows the caller to decide what counts toward its
/// failure budget.
///
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key configured")]
    NoApiKey,
    #[error("HTTP error: {0}")]
    HTTP(#[from] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(reqwest::StatusCode),
}
