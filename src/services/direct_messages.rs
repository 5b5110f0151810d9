//! Direct messages service.

use std::sync::Arc;
use tracing::instrument;

use super::endpoints::{DM_LIST, DM_NEW, DM_SHOW};
use super::ApiRequester;
use crate::auth::percent_encode;
use crate::errors::{TwitterError, TwitterResult};
use crate::types::direct_messages::{EventList, SingleEvent};

/// Direct messages service for sending, listing and showing events.
pub struct DirectMessagesService {
    requester: Arc<ApiRequester>,
}

impl DirectMessagesService {
    /// Creates a new direct messages service.
    pub fn new(requester: Arc<ApiRequester>) -> Self {
        Self { requester }
    }

    /// Lists the first page of direct message events.
    ///
    /// The returned `next_cursor` is not followed.
    #[instrument(skip(self))]
    pub async fn list(&self) -> TwitterResult<EventList> {
        let list: EventList = self.requester.get_json(DM_LIST).await?;
        tracing::debug!(
            count = list.len(),
            has_next_page = list.has_next_page(),
            "Listed direct messages"
        );
        Ok(list)
    }

    /// Fetches a single direct message event.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn show(&self, id: &str) -> TwitterResult<SingleEvent> {
        if id.is_empty() {
            return Err(TwitterError::validation_param("Message ID is required", "id"));
        }

        let path = format!("{}?id={}", DM_SHOW, percent_encode(id));
        self.requester.get_json(&path).await
    }

    /// Sends a direct message and returns the event as stored by the server.
    #[instrument(skip(self, message), fields(recipient = message.event.recipient_id().unwrap_or_default()))]
    pub async fn send(&self, message: &SingleEvent) -> TwitterResult<SingleEvent> {
        message.event.validate_outbound()?;

        let sent: SingleEvent = self.requester.post_json(DM_NEW, message).await?;
        tracing::debug!(id = sent.event.id.as_deref().unwrap_or_default(), "Sent direct message");
        Ok(sent)
    }

    /// Shorthand for sending `text` to `recipient_id`.
    pub async fn send_text(&self, recipient_id: &str, text: &str) -> TwitterResult<SingleEvent> {
        self.send(&SingleEvent::sendable(recipient_id, text)).await
    }
}

impl std::fmt::Debug for DirectMessagesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectMessagesService").finish()
    }
}
