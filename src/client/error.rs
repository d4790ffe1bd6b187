//! Fetch error types
//!
//! `Display` is the technical description that goes to the logs.
//! [`FetchError::user_message`] is what the view shows.

use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str = "Request timeout. Please check your internet connection.";
pub const NOT_FOUND_MESSAGE: &str = "Location not found. Please try a different city.";
pub const API_FAILURE_MESSAGE: &str = "Failed to fetch prayer times for this location";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch prayer times. Please try again.";

/// Errors that can occur while fetching prayer times
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Remote answered HTTP 404
    #[error("Location not found (HTTP 404)")]
    NotFound,

    /// HTTP succeeded but the body carried a non-200 code
    #[error("API error {code}: {status}")]
    Api { code: i64, status: String },

    /// Any other non-success HTTP status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// Connection, TLS or other transport failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Classify a `reqwest` error raised while sending or reading a response
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }

    /// Fixed message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Timeout => TIMEOUT_MESSAGE,
            FetchError::NotFound => NOT_FOUND_MESSAGE,
            FetchError::Api { .. } => API_FAILURE_MESSAGE,
            FetchError::Status(_) | FetchError::Transport(_) | FetchError::Decode(_) => {
                GENERIC_FAILURE_MESSAGE
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
