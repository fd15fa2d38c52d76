/// Error types for fetching indicator series
use thiserror::Error;

/// Failure to obtain one indicator page, or the whole run
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (connect, timeout, body read)
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Bad response status {status} for {url}")]
    Status { status: u16, url: String },

    /// Body is not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Every (country, indicator) request failed
    #[error("All {attempted} indicator requests failed")]
    AllRequestsFailed { attempted: usize },
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
