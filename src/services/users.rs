//! Users service.

use std::sync::Arc;
use tracing::instrument;

use super::endpoints::USER_BY_USERNAME;
use super::ApiRequester;
use crate::errors::{TwitterError, TwitterResult};
use crate::types::users::{User, UserLookup};

/// Users service for resolving handles.
pub struct UsersService {
    requester: Arc<ApiRequester>,
}

impl UsersService {
    /// Creates a new users service.
    pub fn new(requester: Arc<ApiRequester>) -> Self {
        Self { requester }
    }

    /// Resolves a handle to a user.
    ///
    /// The handle is appended to the path as given; escaping it is the
    /// caller's job.
    #[instrument(skip(self, handle), fields(handle = %handle))]
    pub async fn by_username(&self, handle: &str) -> TwitterResult<User> {
        if handle.is_empty() {
            return Err(TwitterError::validation_param("Handle is required", "handle"));
        }

        let path = format!("{}{}", USER_BY_USERNAME, handle);
        let lookup: UserLookup = self.requester.get_json(&path).await?;
        Ok(lookup.data)
    }
}

impl std::fmt::Debug for UsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersService").finish()
    }
}
