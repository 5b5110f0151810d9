//! Service modules for the Twitter API.
//!
//! Each operation performs exactly one signed round trip; nothing is retried
//! and pagination cursors are returned, not followed.

mod direct_messages;
mod rate_limits;
mod requester;
mod users;

pub use direct_messages::DirectMessagesService;
pub use rate_limits::RateLimitService;
pub use requester::ApiRequester;
pub use users::UsersService;

/// Endpoint paths, relative to the API base URL.
pub mod endpoints {
    /// Creates a direct message event.
    pub const DM_NEW: &str = "/1.1/direct_messages/events/new.json";
    /// Fetches one direct message event by `id`.
    pub const DM_SHOW: &str = "/1.1/direct_messages/events/show.json";
    /// Lists direct message events.
    pub const DM_LIST: &str = "/1.1/direct_messages/events/list.json";
    /// Deletes a direct message event. No operation uses it yet.
    pub const DM_DESTROY: &str = "/1.1/direct_messages/events/destroy.json";
    /// Rate limit status, filtered to direct message resources.
    pub const DM_RATE_LIMIT: &str =
        "/1.1/application/rate_limit_status.json?resources=direct_messages";
    /// v2 user lookup; the handle is appended verbatim.
    pub const USER_BY_USERNAME: &str = "/2/users/by/username/";
}
