//! Builds authenticated LinkedIn connections.
//!
//! A [`Connector`] owns no credentials. It resolves the application from an
//! injected [`ApplicationStore`] (under [`RESOURCE_OWNER`]) and the access
//! token from an injected [`TokenStore`], then binds both into a fresh
//! [`LinkedInApi`] for the duration of the caller's work.
//!
//! Requests authenticate with `Authorization: Bearer <token>`. The OAuth 1.0a
//! token secret some stored grants still carry is accepted and ignored.

use std::sync::Arc;

use crate::api::LinkedInApi;
use crate::auth::{Application, ApplicationStore, Token, TokenStore, RESOURCE_OWNER};
use crate::clients::{ConnectionError, HttpClient};
use crate::config::{AccessToken, ApiKey, ApiSecretKey, LinkedInConfig};
use crate::model::{Activity, Location};

/// Factory for [`LinkedInApi`] handles.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use linkedin_channel::auth::{MemoryApplicationStore, MemoryTokenStore};
/// use linkedin_channel::{Connector, LinkedInConfig};
///
/// let connector = Connector::new(
///     LinkedInConfig::default(),
///     Arc::new(MemoryApplicationStore::new()),
///     Arc::new(MemoryTokenStore::new()),
/// );
///
/// let api = connector.connect("app-key", "app-secret", "AQV-token", None).unwrap();
/// assert_eq!(api.client().base_url().as_ref(), "https://api.linkedin.com/v1/");
/// ```
#[derive(Clone)]
pub struct Connector {
    config: LinkedInConfig,
    applications: Arc<dyn ApplicationStore>,
    tokens: Arc<dyn TokenStore>,
}

// Verify Connector is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connector>();
};

impl Connector {
    /// Creates a connector over the given stores.
    #[must_use]
    pub fn new(
        config: LinkedInConfig,
        applications: Arc<dyn ApplicationStore>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            config,
            applications,
            tokens,
        }
    }

    /// Returns the configuration connections are built with.
    #[must_use]
    pub const fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    /// Builds a connection from raw credentials.
    ///
    /// `token_secret` belongs to OAuth 1.0a grants and is not used for
    /// bearer authentication.
    ///
    /// # Errors
    ///
    /// - [`ConnectionError::Config`] if any credential is empty or malformed
    /// - [`ConnectionError::Transport`] if the HTTP client cannot be built
    pub fn connect(
        &self,
        app_key: &str,
        app_secret: &str,
        access_token: &str,
        token_secret: Option<&str>,
    ) -> Result<LinkedInApi, ConnectionError> {
        let application = Application::new(ApiKey::new(app_key)?, ApiSecretKey::new(app_secret)?);
        let access_token = AccessToken::new(access_token)?;
        if token_secret.is_some() {
            tracing::debug!("ignoring OAuth 1.0a token secret, using bearer authentication");
        }
        self.bind(&application, &access_token)
    }

    /// Builds a connection for the location an activity publishes to.
    ///
    /// # Errors
    ///
    /// - [`ConnectionError::MissingApplication`] if no LinkedIn app is registered
    /// - [`ConnectionError::MissingToken`] if the location has no stored token
    /// - [`ConnectionError::Store`] if a store lookup fails
    /// - [`ConnectionError::Transport`] if the HTTP client cannot be built
    pub fn connect_by_activity(&self, activity: &Activity) -> Result<LinkedInApi, ConnectionError> {
        self.connect_by_location(&activity.location)
    }

    /// Builds a connection for a location.
    ///
    /// # Errors
    ///
    /// See [`Connector::connect_by_activity`].
    pub fn connect_by_location(&self, location: &Location) -> Result<LinkedInApi, ConnectionError> {
        let token = self
            .tokens
            .token(location)
            .map_err(ConnectionError::Store)?
            .ok_or_else(|| ConnectionError::MissingToken {
                location: location.identifier.clone(),
            })?;
        self.connect_by_token(&token)
    }

    /// Builds a connection from an already loaded token.
    ///
    /// # Errors
    ///
    /// - [`ConnectionError::MissingApplication`] if no LinkedIn app is registered
    /// - [`ConnectionError::Store`] if the application lookup fails
    /// - [`ConnectionError::Transport`] if the HTTP client cannot be built
    pub fn connect_by_token(&self, token: &Token) -> Result<LinkedInApi, ConnectionError> {
        if token.expired() {
            tracing::warn!(
                location = token.location_identifier.as_deref().unwrap_or("-"),
                "connecting with an expired LinkedIn token"
            );
        }
        let application = self.application()?;
        self.bind(&application, &token.access_token)
    }

    fn application(&self) -> Result<Application, ConnectionError> {
        self.applications
            .application(RESOURCE_OWNER)
            .map_err(ConnectionError::Store)?
            .ok_or_else(|| ConnectionError::MissingApplication {
                resource_owner: RESOURCE_OWNER.to_string(),
            })
    }

    fn bind(
        &self,
        application: &Application,
        access_token: &AccessToken,
    ) -> Result<LinkedInApi, ConnectionError> {
        let client = HttpClient::new(&self.config, access_token)?;
        tracing::debug!(
            host = self.config.api_base_url().host_name(),
            application = ?application.key,
            "connected to LinkedIn"
        );
        Ok(LinkedInApi::new(client, &self.config))
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
