//! Configuration module for the Twitter client.
//!
//! Holds the four OAuth 1.0a secrets, the API base URL and the transport
//! timeout.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::errors::{TwitterError, TwitterResult};

/// Default base URL for the Twitter API.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("integrations-twitter/", env!("CARGO_PKG_VERSION"));

/// OAuth 1.0a credentials.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) consumer_key: SecretString,
    pub(crate) consumer_secret: SecretString,
    pub(crate) access_token: SecretString,
    pub(crate) access_secret: SecretString,
}

impl Credentials {
    /// Creates credentials from the consumer and access token pairs.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: SecretString::new(consumer_key.into()),
            consumer_secret: SecretString::new(consumer_secret.into()),
            access_token: SecretString::new(access_token.into()),
            access_secret: SecretString::new(access_secret.into()),
        }
    }

    /// Fails if any of the four values is empty.
    ///
    /// Not called when building a client; empty values are signed as given
    /// and left for the server to reject.
    pub fn validate(&self) -> TwitterResult<()> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_secret", &self.access_secret),
        ];

        for (name, value) in fields {
            if value.expose_secret().is_empty() {
                return Err(TwitterError::configuration(format!(
                    "{} cannot be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Returns the consumer key hint (last 4 characters) for debugging.
    pub fn consumer_key_hint(&self) -> String {
        let key = self.consumer_key.expose_secret();
        let count = key.chars().count();
        if count > 4 {
            let tail: String = key.chars().skip(count - 4).collect();
            format!("...{}", tail)
        } else {
            "****".to_string()
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key_hint())
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .field("access_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the Twitter client.
#[derive(Clone)]
pub struct TwitterConfig {
    pub(crate) credentials: Credentials,
    /// Base URL for API requests, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl TwitterConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> TwitterConfigBuilder {
        TwitterConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TWITTER_CONSUMER_KEY` (required)
    /// - `TWITTER_CONSUMER_SECRET` (required)
    /// - `TWITTER_ACCESS_TOKEN` (required)
    /// - `TWITTER_ACCESS_SECRET` (required)
    /// - `TWITTER_BASE_URL` (optional): Custom base URL
    /// - `TWITTER_TIMEOUT` (optional): Request timeout in seconds
    pub fn from_env() -> TwitterResult<Self> {
        let mut builder = TwitterConfigBuilder::new().credentials(
            required_env("TWITTER_CONSUMER_KEY")?,
            required_env("TWITTER_CONSUMER_SECRET")?,
            required_env("TWITTER_ACCESS_TOKEN")?,
            required_env("TWITTER_ACCESS_SECRET")?,
        );

        if let Ok(base_url) = std::env::var("TWITTER_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(timeout_str) = std::env::var("TWITTER_TIMEOUT") {
            match timeout_str.parse::<u64>() {
                Ok(secs) => builder = builder.timeout_secs(secs),
                Err(_) => tracing::warn!(value = %timeout_str, "Ignoring invalid TWITTER_TIMEOUT"),
            }
        }

        builder.build()
    }

    /// Returns the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

fn required_env(name: &str) -> TwitterResult<String> {
    std::env::var(name).map_err(|_| TwitterError::Configuration {
        message: format!("{} environment variable not set", name),
    })
}

impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for `TwitterConfig`.
#[derive(Default)]
pub struct TwitterConfigBuilder {
    credentials: Option<Credentials>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwitterConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the four OAuth 1.0a secrets.
    pub fn credentials(
        mut self,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(
            consumer_key,
            consumer_secret,
            access_token,
            access_secret,
        ));
        self
    }

    /// Sets prebuilt credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> TwitterResult<TwitterConfig> {
        let credentials = self
            .credentials
            .ok_or_else(|| TwitterError::configuration("Credentials are required"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "https" | "http") {
            return Err(TwitterError::configuration(format!(
                "Unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }
        if parsed.scheme() == "http" {
            tracing::warn!(base_url = %base_url, "Base URL is not using HTTPS");
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(TwitterError::configuration("Timeout must be greater than zero"));
        }

        Ok(TwitterConfig {
            credentials,
            base_url,
            timeout,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}
