//! Error types for the Hey Bible client.

use serde::{Deserialize, Serialize};

/// Result type for client operations.
pub type HeyBibleResult<T> = Result<T, HeyBibleError>;

/// Error types that can occur when talking to the Hey Bible API.
#[derive(Debug, thiserror::Error)]
pub enum HeyBibleError {
    /// HTTP request failed before a response was produced.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status with a readable message.
    ///
    /// The Display form is the bare message: it is surfaced verbatim in
    /// tool output.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// API failed in a way that carried no usable message.
    #[error("Unknown error")]
    Unknown,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The required credential is missing from the environment.
    #[error("HEY_BIBLE_API_KEY environment variable is required")]
    MissingApiKey,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl HeyBibleError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(body) {
            Self::Api {
                status,
                message: error_response.error,
            }
        } else if body.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Api {
                status,
                message: body.trim().to_string(),
            }
        }
    }
}

/// Error response body from the Hey Bible API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
