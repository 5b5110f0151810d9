//! Direct message event types.
//!
//! Direct messages travel as `message_create` events. Show and send use the
//! `{"event": ...}` wrapper, listing uses `{"events": [...], "next_cursor": ...}`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{TwitterError, TwitterResult};

/// Event type tag for a direct message.
pub const MESSAGE_CREATE: &str = "message_create";

fn default_event_type() -> String {
    MESSAGE_CREATE.to_string()
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Reads `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A direct message event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessageEvent {
    /// Event ID, assigned by the server.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub id: Option<String>,

    /// Creation time in epoch milliseconds, assigned by the server.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub created_timestamp: Option<String>,

    /// Event type, always `message_create` for direct messages.
    #[serde(rename = "type", default = "default_event_type")]
    pub event_type: String,

    /// The message payload.
    #[serde(
        rename = "message_create",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<MessageCreate>,
}

impl DirectMessageEvent {
    /// Creates an outbound `message_create` event.
    pub fn message_create(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            created_timestamp: None,
            event_type: default_event_type(),
            message: Some(MessageCreate {
                target: MessageTarget {
                    recipient_id: recipient_id.into(),
                },
                sender_id: None,
                message_data: MessageData { text: text.into() },
            }),
        }
    }

    /// Returns the message text, if any.
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.message_data.text.as_str())
    }

    /// Returns the recipient ID, if any.
    pub fn recipient_id(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.target.recipient_id.as_str())
    }

    /// Returns the sender ID, if any.
    pub fn sender_id(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.sender_id.as_deref())
    }

    /// Parses `created_timestamp` into a UTC time.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.created_timestamp.as_deref()?.parse::<i64>().ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }

    /// Checks that the event can be sent.
    ///
    /// The type must be `message_create`, the payload must name a recipient,
    /// and the server-assigned fields must be empty.
    pub fn validate_outbound(&self) -> TwitterResult<()> {
        if self.event_type != MESSAGE_CREATE {
            return Err(TwitterError::validation_param(
                format!("Event type must be {}, got {}", MESSAGE_CREATE, self.event_type),
                "type",
            ));
        }

        let message = self.message.as_ref().ok_or_else(|| {
            TwitterError::validation_param("Event has no message payload", "message_create")
        })?;

        if message.target.recipient_id.is_empty() {
            return Err(TwitterError::validation_param(
                "Recipient ID is required",
                "recipient_id",
            ));
        }

        if !is_blank(&self.id) {
            return Err(TwitterError::validation_param(
                "Event ID is assigned by the server",
                "id",
            ));
        }

        if !is_blank(&self.created_timestamp) {
            return Err(TwitterError::validation_param(
                "Creation timestamp is assigned by the server",
                "created_timestamp",
            ));
        }

        Ok(())
    }
}

/// The `message_create` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCreate {
    /// Who the message is for.
    pub target: MessageTarget,

    /// Sender user ID, filled in by the server.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub sender_id: Option<String>,

    /// Message content.
    pub message_data: MessageData,
}

/// Message recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTarget {
    /// Recipient user ID.
    pub recipient_id: String,
}

/// Message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    /// Message text.
    pub text: String,
}

/// Wrapper used by the show and new endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleEvent {
    /// The event.
    pub event: DirectMessageEvent,
}

impl SingleEvent {
    /// Builds a sendable envelope for `text` addressed to `recipient_id`.
    pub fn sendable(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            event: DirectMessageEvent::message_create(recipient_id, text),
        }
    }
}

impl From<DirectMessageEvent> for SingleEvent {
    fn from(event: DirectMessageEvent) -> Self {
        Self { event }
    }
}

/// Wrapper used by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventList {
    /// Events on this page, newest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<DirectMessageEvent>,

    /// Cursor for the next page. Empty when there is none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_cursor: String,
}

impl EventList {
    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns true if the API reported another page.
    pub fn has_next_page(&self) -> bool {
        !self.next_cursor.is_empty()
    }

    /// Returns iterator over events.
    pub fn iter(&self) -> impl Iterator<Item = &DirectMessageEvent> {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_sendable_omits_server_fields() {
        let value = serde_json::to_value(SingleEvent::sendable("123", "hi")).unwrap();

        assert_eq!(
            value,
            json!({
                "event": {
                    "type": "message_create",
                    "message_create": {
                        "target": { "recipient_id": "123" },
                        "message_data": { "text": "hi" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_blank_optional_fields_are_omitted() {
        let mut event = DirectMessageEvent::message_create("123", "hi");
        event.id = Some(String::new());
        event.created_timestamp = Some(String::new());
        if let Some(message) = event.message.as_mut() {
            message.sender_id = Some(String::new());
        }

        let body = serde_json::to_string(&event).unwrap();
        assert!(!body.contains("\"id\""));
        assert!(!body.contains("created_timestamp"));
        assert!(!body.contains("sender_id"));
    }

    #[test]
    fn test_decode_server_event() {
        let event: SingleEvent = serde_json::from_value(json!({
            "event": {
                "type": "message_create",
                "id": "1100000000000000000",
                "created_timestamp": "1556240839000",
                "message_create": {
                    "target": { "recipient_id": "123" },
                    "sender_id": "456",
                    "message_data": { "text": "hi", "entities": { "hashtags": [] } }
                }
            }
        }))
        .unwrap();

        assert_eq!(event.event.id.as_deref(), Some("1100000000000000000"));
        assert_eq!(event.event.sender_id(), Some("456"));
        assert_eq!(event.event.recipient_id(), Some("123"));
        assert_eq!(event.event.text(), Some("hi"));
        assert_eq!(
            event.event.created_at().map(|t| t.timestamp()),
            Some(1_556_240_839)
        );
    }

    #[test]
    fn test_decode_empty_list() {
        let list: EventList =
            serde_json::from_value(json!({ "events": [], "next_cursor": "" })).unwrap();

        assert!(list.is_empty());
        assert!(!list.has_next_page());
    }

    #[test]
    fn test_decode_null_list_fields() {
        let list: EventList =
            serde_json::from_value(json!({ "events": null, "next_cursor": null })).unwrap();
        assert_eq!(list, EventList::default());

        let list: EventList = serde_json::from_value(json!({})).unwrap();
        assert_eq!(list, EventList::default());
    }

    #[test]
    fn test_validate_outbound() {
        assert!(SingleEvent::sendable("123", "hi").event.validate_outbound().is_ok());

        let mut wrong_type = DirectMessageEvent::message_create("123", "hi");
        wrong_type.event_type = "welcome_message".to_string();
        assert!(wrong_type.validate_outbound().is_err());

        let mut no_payload = DirectMessageEvent::message_create("123", "hi");
        no_payload.message = None;
        assert!(no_payload.validate_outbound().is_err());

        let no_recipient = DirectMessageEvent::message_create("", "hi");
        assert!(no_recipient.validate_outbound().is_err());

        let mut with_id = DirectMessageEvent::message_create("123", "hi");
        with_id.id = Some("42".to_string());
        assert!(with_id.validate_outbound().is_err());

        let mut with_timestamp = DirectMessageEvent::message_create("123", "hi");
        with_timestamp.created_timestamp = Some("1556240839000".to_string());
        assert!(with_timestamp.validate_outbound().is_err());
    }
}
