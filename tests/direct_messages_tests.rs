//! Integration tests for the direct message endpoints.

mod common;

use common::{client_for, setup_mock_server, signed};
use integrations_twitter::{SingleEvent, TwitterError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, query_param};
use wiremock::ResponseTemplate;

fn server_event(id: &str, text: &str) -> serde_json::Value {
    json!({
        "type": "message_create",
        "id": id,
        "created_timestamp": "1556240839000",
        "message_create": {
            "target": { "recipient_id": "123" },
            "sender_id": "456",
            "message_data": { "text": text, "entities": { "urls": [] } }
        }
    })
}

#[tokio::test]
async fn test_list_returns_first_page() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/list.json")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [server_event("2", "second"), server_event("1", "first")],
            "next_cursor": "MTEwMDAwMDAwMDA"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client_for(&server).direct_messages().list().await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list.events[0].text(), Some("second"));
    assert_eq!(list.next_cursor, "MTEwMDAwMDAwMDA");
    assert!(list.has_next_page());
}

#[tokio::test]
async fn test_list_empty_page_is_success() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/list.json")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [],
            "next_cursor": ""
        })))
        .mount(&server)
        .await;

    let list = client_for(&server).direct_messages().list().await.unwrap();

    assert!(list.is_empty());
    assert!(!list.has_next_page());
}

#[tokio::test]
async fn test_list_null_events_is_empty_page() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/list.json")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": null,
            "next_cursor": ""
        })))
        .mount(&server)
        .await;

    let list = client_for(&server).direct_messages().list().await.unwrap();

    assert!(list.is_empty());
    assert!(!list.has_next_page());
}

#[tokio::test]
async fn test_list_non_2xx_without_errors_is_success() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/list.json")
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": null,
            "events": [],
            "next_cursor": ""
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).direct_messages().list().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_rate_limited() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/list.json")
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": [{ "code": 88, "message": "Rate limit exceeded" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).direct_messages().list().await.unwrap_err();

    assert_eq!(err.to_string(), "88");
}

#[tokio::test]
async fn test_show_by_id() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/show.json")
        .and(query_param("id", "1100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "event": server_event("1100", "hello")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let event = client_for(&server)
        .direct_messages()
        .show("1100")
        .await
        .unwrap();

    assert_eq!(event.event.id.as_deref(), Some("1100"));
    assert_eq!(event.event.text(), Some("hello"));
}

#[tokio::test]
async fn test_show_error_envelope_beats_decode_error() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/show.json")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "code": 34, "message": "Sorry, that page does not exist." },
                { "code": 130, "message": "Over capacity" }
            ],
            "event": 17
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .direct_messages()
        .show("1")
        .await
        .unwrap_err();

    assert!(matches!(err, TwitterError::Api { .. }));
    assert_eq!(err.to_string(), "34, 130");
}

#[tokio::test]
async fn test_show_malformed_body() {
    let server = setup_mock_server().await;

    signed("GET", "/1.1/direct_messages/events/show.json")
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .direct_messages()
        .show("1")
        .await
        .unwrap_err();

    assert!(matches!(err, TwitterError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn test_send_posts_outbound_envelope() {
    let server = setup_mock_server().await;

    signed("POST", "/1.1/direct_messages/events/new.json")
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "event": {
                "type": "message_create",
                "message_create": {
                    "target": { "recipient_id": "123" },
                    "message_data": { "text": "hi" }
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "event": server_event("1100", "hi")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sent = client_for(&server)
        .direct_messages()
        .send(&SingleEvent::sendable("123", "hi"))
        .await
        .unwrap();

    assert_eq!(sent.event.id.as_deref(), Some("1100"));
    assert_eq!(sent.event.created_timestamp.as_deref(), Some("1556240839000"));
    assert_eq!(sent.event.sender_id(), Some("456"));
}

#[tokio::test]
async fn test_send_error_envelope_beats_decode_error() {
    let server = setup_mock_server().await;

    signed("POST", "/1.1/direct_messages/events/new.json")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "code": 349, "message": "You cannot send messages to this user." }],
            "event": "garbage"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .direct_messages()
        .send_text("123", "hi")
        .await
        .unwrap_err();

    assert_eq!(err.api_codes(), Some(&[349][..]));
}
