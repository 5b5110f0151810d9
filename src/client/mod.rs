//! Twitter API client.
//!
//! Provides the main client interface for the direct message and user
//! lookup endpoints.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthProvider, OAuth1Auth};
use crate::config::{Credentials, TwitterConfig, TwitterConfigBuilder};
use crate::errors::{TwitterError, TwitterResult};
use crate::services::{ApiRequester, DirectMessagesService, RateLimitService, UsersService};
use crate::transport::{HttpTransport, HttpTransportImpl};

/// The main Twitter client.
///
/// Build it once and reuse it; it is `Send + Sync` and every call is an
/// independent signed request.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_twitter::{SingleEvent, TwitterClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TwitterClient::new("consumer-key", "consumer-secret", "token", "token-secret")?;
///
///     let user = client.users().by_username("TwitterDev").await?;
///     let sent = client
///         .direct_messages()
///         .send(&SingleEvent::sendable(&user.id, "hello"))
///         .await?;
///     println!("sent {:?}", sent.event.id);
///     Ok(())
/// }
/// ```
pub struct TwitterClient {
    config: TwitterConfig,
    direct_messages: DirectMessagesService,
    users: UsersService,
    rate_limits: RateLimitService,
}

impl TwitterClient {
    /// Creates a client from the four OAuth 1.0a secrets with default settings.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> TwitterResult<Self> {
        TwitterClientBuilder::new()
            .credentials(consumer_key, consumer_secret, access_token, access_secret)
            .build()
    }

    /// Creates a new client builder.
    pub fn builder() -> TwitterClientBuilder {
        TwitterClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// See [`TwitterConfig::from_env`] for the variables read.
    pub fn from_env() -> TwitterResult<Self> {
        let config = TwitterConfig::from_env()?;
        TwitterClientBuilder::from_config(config).build()
    }

    /// Returns the direct messages service.
    pub fn direct_messages(&self) -> &DirectMessagesService {
        &self.direct_messages
    }

    /// Returns the users service.
    pub fn users(&self) -> &UsersService {
        &self.users
    }

    /// Returns the rate limit service.
    pub fn rate_limits(&self) -> &RateLimitService {
        &self.rate_limits
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TwitterConfig {
        &self.config
    }
}

impl std::fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Twitter client.
pub struct TwitterClientBuilder {
    config_builder: TwitterConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthProvider>>,
}

impl TwitterClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: TwitterConfigBuilder::new(),
            transport: None,
            auth: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: TwitterConfig) -> Self {
        Self {
            config_builder: TwitterConfigBuilder::new()
                .with_credentials(config.credentials)
                .base_url(config.base_url)
                .timeout(config.timeout)
                .user_agent(config.user_agent),
            transport: None,
            auth: None,
        }
    }

    /// Sets the four OAuth 1.0a secrets.
    pub fn credentials(
        mut self,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        self.config_builder = self.config_builder.credentials(
            consumer_key,
            consumer_secret,
            access_token,
            access_secret,
        );
        self
    }

    /// Sets prebuilt credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.config_builder = self.config_builder.with_credentials(credentials);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(user_agent);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom auth provider.
    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Builds the client.
    pub fn build(self) -> TwitterResult<TwitterClient> {
        let config = self.config_builder.build()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(config.timeout, &config.user_agent)
                    .map_err(|e| TwitterError::configuration(e.to_string()))?,
            ),
        };

        let auth: Arc<dyn AuthProvider> = match self.auth {
            Some(a) => a,
            None => Arc::new(OAuth1Auth::new(config.credentials.clone())),
        };

        let requester = Arc::new(ApiRequester::new(transport, auth, config.base_url.clone()));

        tracing::debug!(
            base_url = %config.base_url,
            consumer_key = %config.credentials.consumer_key_hint(),
            "Twitter client created"
        );

        Ok(TwitterClient {
            direct_messages: DirectMessagesService::new(Arc::clone(&requester)),
            users: UsersService::new(Arc::clone(&requester)),
            rate_limits: RateLimitService::new(requester),
            config,
        })
    }
}

impl Default for TwitterClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
