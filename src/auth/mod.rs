//! Authentication module for the Twitter client.
//!
//! Every request is signed with OAuth 1.0a (HMAC-SHA1) using the consumer
//! and access token pairs held in [`Credentials`].

mod signature;

pub use signature::{
    authorization_header, base_uri, parameter_string, percent_encode, sign,
    signature_base_string, signing_key, OAUTH_VERSION, SIGNATURE_METHOD,
};

use rand::distributions::Alphanumeric;
use rand::Rng;
use secrecy::ExposeSecret;
use url::Url;

use crate::config::Credentials;
use crate::errors::{TwitterError, TwitterResult};
use crate::transport::{HttpMethod, HttpRequest};

/// Length of generated `oauth_nonce` values.
const NONCE_LEN: usize = 32;

/// Authentication provider trait.
///
/// Implementations produce the `Authorization` header for a request.
pub trait AuthProvider: Send + Sync {
    /// Computes the `Authorization` header value for `method` and `url`.
    fn authorization(&self, method: HttpMethod, url: &str) -> TwitterResult<String>;

    /// Signs the request in place.
    fn apply_auth(&self, request: &mut HttpRequest) -> TwitterResult<()> {
        let value = self.authorization(request.method, &request.url)?;
        request.headers.insert("Authorization".to_string(), value);
        Ok(())
    }
}

/// OAuth 1.0a user-context authentication.
pub struct OAuth1Auth {
    credentials: Credentials,
}

impl OAuth1Auth {
    /// Creates a new OAuth 1.0a provider.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Signs with an explicit nonce and timestamp.
    pub fn sign_with(
        &self,
        method: HttpMethod,
        url: &str,
        nonce: &str,
        timestamp: i64,
    ) -> TwitterResult<String> {
        let parsed = Url::parse(url).map_err(|e| TwitterError::Signing {
            message: format!("Invalid request URL {}: {}", url, e),
        })?;

        let mut oauth_params = vec![
            (
                "oauth_consumer_key".to_string(),
                self.credentials.consumer_key.expose_secret().clone(),
            ),
            ("oauth_nonce".to_string(), nonce.to_string()),
            (
                "oauth_signature_method".to_string(),
                SIGNATURE_METHOD.to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            (
                "oauth_token".to_string(),
                self.credentials.access_token.expose_secret().clone(),
            ),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];

        let base = signature_base_string(method.as_str(), &parsed, &oauth_params);
        let key = signing_key(
            self.credentials.consumer_secret.expose_secret(),
            self.credentials.access_secret.expose_secret(),
        );
        let signature = sign(&key, &base)?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        Ok(authorization_header(&oauth_params))
    }

    /// Gets a hint of the consumer key for debugging (last 4 characters).
    pub fn key_hint(&self) -> String {
        self.credentials.consumer_key_hint()
    }
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

impl AuthProvider for OAuth1Auth {
    fn authorization(&self, method: HttpMethod, url: &str) -> TwitterResult<String> {
        self.sign_with(
            method,
            url,
            &generate_nonce(),
            chrono::Utc::now().timestamp(),
        )
    }
}

impl std::fmt::Debug for OAuth1Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth1Auth")
            .field("credentials", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .finish()
    }
}
