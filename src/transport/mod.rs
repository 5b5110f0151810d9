//! HTTP transport layer for the Twitter client.
//!
//! Provides the transport abstraction and its reqwest implementation. The
//! transport never interprets bodies; error envelopes are handled by the
//! services.

mod http;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, HttpTransportImpl};

use std::time::Duration;

/// Transport error types.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// The request could not be built or sent.
    #[error("Request error: {message}")]
    Request {
        /// Error message.
        message: String,
    },

    /// The response body could not be read.
    #[error("Body error: {message}")]
    Body {
        /// Error message.
        message: String,
    },
}
