//! Rate limit status service.
//!
//! The body is proxied raw; this client never enforces limits itself.

use bytes::Bytes;
use std::sync::Arc;
use tracing::instrument;

use super::endpoints::DM_RATE_LIMIT;
use super::ApiRequester;
use crate::errors::TwitterResult;

/// Rate limit status service.
pub struct RateLimitService {
    requester: Arc<ApiRequester>,
}

impl RateLimitService {
    /// Creates a new rate limit service.
    pub fn new(requester: Arc<ApiRequester>) -> Self {
        Self { requester }
    }

    /// Fetches the raw rate limit status for direct message resources.
    ///
    /// Transport and body-read failures are returned. The body itself is not
    /// inspected, so an error envelope comes back as plain bytes.
    #[instrument(skip(self))]
    pub async fn status(&self) -> TwitterResult<Bytes> {
        self.requester.get_raw(DM_RATE_LIMIT).await
    }

    /// Like [`Self::status`], but any failure yields an empty body.
    pub async fn status_or_empty(&self) -> Bytes {
        match self.status().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Rate limit status unavailable");
                Bytes::new()
            }
        }
    }
}

impl std::fmt::Debug for RateLimitService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitService").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TwitterError;
    use crate::mocks::{mock_requester, MockResponse, MockTransport};
    use crate::transport::TransportError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_status_returns_raw_body() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::raw(200, br#"{"resources":{"direct_messages":{}}}"#.to_vec()));

        let body = RateLimitService::new(mock_requester(&transport))
            .status()
            .await
            .unwrap();

        assert_eq!(&body[..], br#"{"resources":{"direct_messages":{}}}"#);
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.twitter.com/1.1/application/rate_limit_status.json?resources=direct_messages"
        );
    }

    #[tokio::test]
    async fn test_status_surfaces_transport_failure() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_failure(TransportError::Timeout {
            timeout: Duration::from_secs(30),
        });

        let err = RateLimitService::new(mock_requester(&transport))
            .status()
            .await
            .unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_status_or_empty_swallows_failure() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_failure(TransportError::Connection {
            message: "dns error".to_string(),
        });

        let body = RateLimitService::new(mock_requester(&transport))
            .status_or_empty()
            .await;

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_status_passes_error_envelope_through() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::raw(
            401,
            br#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#.to_vec(),
        ));

        let result = RateLimitService::new(mock_requester(&transport)).status().await;

        assert!(!matches!(result, Err(TwitterError::Api { .. })));
        assert!(result.unwrap().starts_with(b"{\"errors\""));
    }
}
