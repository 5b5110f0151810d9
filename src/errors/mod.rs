//! Error types for the Twitter client.
//!
//! Every fallible operation returns [`TwitterResult`]. API-level failures are
//! detected from the response body, not the HTTP status, see [`envelope`].

pub mod envelope;

pub use envelope::{join_codes, parse_body, ApiErrorEntry, ApiErrorEnvelope, ParsedBody};

use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for Twitter operations.
pub type TwitterResult<T> = Result<T, TwitterError>;

/// Error type for Twitter client operations.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// Configuration error (missing credential, invalid base URL, etc.)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Local input validation failed before any request was sent.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue.
        message: String,
        /// The parameter that caused the error.
        param: Option<String>,
    },

    /// The OAuth signature could not be produced.
    #[error("Signing error: {message}")]
    Signing {
        /// Error message.
        message: String,
    },

    /// Network, connection or timeout failure.
    #[error("Transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
        /// Whether the request hit the client timeout.
        timed_out: bool,
    },

    /// The response body could not be read in full.
    #[error("Failed to read response body: {message}")]
    BodyRead {
        /// Error message.
        message: String,
    },

    /// The API answered with a non-empty error envelope.
    ///
    /// Only the numeric codes are kept; the display form is the codes joined
    /// by `", "`.
    #[error("{}", join_codes(.codes))]
    Api {
        /// Error codes in the order the API returned them.
        codes: Vec<i64>,
    },

    /// The response body did not match the expected success shape.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Error message.
        message: String,
        /// HTTP status code of the response.
        status: u16,
    },

    /// The outbound payload could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl TwitterError {
    /// Creates a validation error naming the offending parameter.
    pub fn validation_param(message: impl Into<String>, param: impl Into<String>) -> Self {
        TwitterError::Validation {
            message: message.into(),
            param: Some(param.into()),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        TwitterError::Configuration {
            message: message.into(),
        }
    }

    /// Builds an API error from the decoded envelope entries.
    pub fn from_entries(entries: &[ApiErrorEntry]) -> Self {
        TwitterError::Api {
            codes: entries.iter().map(|e| e.code).collect(),
        }
    }

    /// Returns the API error codes, if this is an API error.
    pub fn api_codes(&self) -> Option<&[i64]> {
        match self {
            TwitterError::Api { codes } => Some(codes),
            _ => None,
        }
    }

    /// Returns true if the request failed because the client timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TwitterError::Transport { timed_out: true, .. })
    }
}

impl From<TransportError> for TwitterError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Body { message } => TwitterError::BodyRead { message },
            TransportError::Timeout { .. } => TwitterError::Transport {
                message: err.to_string(),
                timed_out: true,
            },
            TransportError::Connection { .. } | TransportError::Request { .. } => {
                TwitterError::Transport {
                    message: err.to_string(),
                    timed_out: false,
                }
            }
        }
    }
}

impl From<url::ParseError> for TwitterError {
    fn from(err: url::ParseError) -> Self {
        TwitterError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
