//! Type definitions for the Twitter API.
//!
//! Field names follow the wire format exactly.

pub mod direct_messages;
pub mod users;
