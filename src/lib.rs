//! Twitter Direct Message Client
//!
//! A small async client for the Twitter direct message REST endpoints and the
//! v2 handle lookup. Every request is signed with OAuth 1.0a (HMAC-SHA1).
//!
//! # Features
//!
//! - **Direct messages**: send, list (first page) and show `message_create` events
//! - **User lookup**: resolve a handle to a stable user ID
//! - **Rate limit status**: raw passthrough of the direct message limits
//! - **Error envelopes**: `{"errors": [...]}` bodies are detected before decoding,
//!   whatever the HTTP status
//! - **Observability**: `tracing` spans on every operation
//!
//! No retries, rate-limit enforcement or pagination are performed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_twitter::TwitterClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TwitterClient::from_env()?;
//!
//!     let page = client.direct_messages().list().await?;
//!     for event in page.iter() {
//!         println!("{:?}: {:?}", event.id, event.text());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{TwitterClient, TwitterClientBuilder};
pub use config::{Credentials, TwitterConfig};
pub use errors::{TwitterError, TwitterResult};

// Type re-exports
pub use types::direct_messages::{
    DirectMessageEvent, EventList, MessageCreate, MessageData, MessageTarget, SingleEvent,
    MESSAGE_CREATE,
};
pub use types::users::User;

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
