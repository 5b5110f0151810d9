//! Shared helpers for the WireMock integration tests.

#![allow(dead_code)]

use std::time::Duration;

use integrations_twitter::TwitterClient;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockBuilder, MockServer};

/// Starts a fresh mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client pointed at `server`.
pub fn client_for(server: &MockServer) -> TwitterClient {
    client_with_base(&server.uri(), Duration::from_secs(30))
}

/// Builds a client for an arbitrary base URL and timeout.
pub fn client_with_base(base_url: &str, timeout: Duration) -> TwitterClient {
    TwitterClient::builder()
        .credentials("test-consumer-key", "test-consumer-secret", "test-token", "test-token-secret")
        .base_url(base_url)
        .timeout(timeout)
        .build()
        .expect("Failed to build client")
}

/// A mock that only matches signed requests.
pub fn signed(method_matcher: &str, path_matcher: &str) -> MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header_exists("Authorization"))
}
