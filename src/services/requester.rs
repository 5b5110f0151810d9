//! Signed request execution shared by all services.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::auth::AuthProvider;
use crate::errors::{parse_body, TwitterError, TwitterResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Builds, signs and sends requests, then classifies the response body.
pub struct ApiRequester {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
    base_url: String,
}

impl ApiRequester {
    /// Creates a new requester for `base_url`.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: Arc<dyn AuthProvider>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            auth,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Signs and sends a request, returning the fully read response.
    pub async fn execute(&self, mut request: HttpRequest) -> TwitterResult<HttpResponse> {
        self.auth.apply_auth(&mut request)?;

        let method = request.method;
        let start = Instant::now();
        let response = self.transport.send(request).await.map_err(TwitterError::from);

        match &response {
            Ok(r) => tracing::debug!(
                %method,
                status = r.status,
                duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                "Request completed"
            ),
            Err(e) => tracing::debug!(%method, error = %e, "Request failed"),
        }

        response
    }

    /// GETs `path` and decodes the body as `T` after the error envelope check.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TwitterResult<T> {
        let response = self.execute(HttpRequest::get(self.url(path))).await?;
        parse_body(&response.body).into_result(response.status)
    }

    /// POSTs `body` as JSON and decodes the response like [`Self::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> TwitterResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| TwitterError::Serialization {
            message: e.to_string(),
        })?;

        let request = HttpRequest::post(self.url(path))
            .with_header("Content-Type", "application/json")
            .with_body(payload);

        let response = self.execute(request).await?;
        parse_body(&response.body).into_result(response.status)
    }

    /// GETs `path` and returns the raw body without interpreting it.
    pub async fn get_raw(&self, path: &str) -> TwitterResult<Bytes> {
        let response = self.execute(HttpRequest::get(self.url(path))).await?;
        Ok(response.body)
    }
}

impl std::fmt::Debug for ApiRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequester")
            .field("base_url", &self.base_url)
            .finish()
    }
}
