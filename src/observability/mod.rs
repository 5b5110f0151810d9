//! Observability module for the Twitter client.
//!
//! The client emits `tracing` spans and events; this module installs a
//! `tracing-subscriber` to print them.

mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
