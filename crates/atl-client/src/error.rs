//! Error types for the record API client.

use thiserror::Error;

/// Errors that can occur while talking to the record API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid API URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL text.
        url: String,
        /// Parser message.
        message: String,
    },

    /// Request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("API returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        message: String,
    },

    /// The endpoint reported a failure in its response envelope.
    #[error("API error: {0}")]
    Api(String),

    /// Failed to encode a request parameter or decode a payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response envelope lacked an expected field.
    #[error("malformed API response: missing '{0}'")]
    MissingField(&'static str),
}

impl ClientError {
    /// Returns a short message suitable for display to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl { .. } => "The API URL is not valid.".to_string(),
            Self::Network(_) => {
                "Could not reach the API. Please check your connection.".to_string()
            }
            Self::Api(message) => format!("Error: {message}"),
            Self::Status { .. } | Self::Json(_) | Self::MissingField(_) => {
                "The API returned an unexpected response.".to_string()
            }
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
