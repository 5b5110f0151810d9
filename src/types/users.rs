//! User lookup types.

use serde::{Deserialize, Serialize};

/// A Twitter user as returned by the v2 lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable numeric user ID, as a string.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Handle, without the leading `@`.
    pub username: String,
}

/// The `{"data": {...}}` wrapper of the v2 lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookup {
    /// The user.
    pub data: User,
}
