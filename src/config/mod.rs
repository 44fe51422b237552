//! Configuration types for the LinkedIn channel.
//!
//! # Overview
//!
//! - [`LinkedInConfig`]: endpoints, scopes and behavior flags
//! - [`LinkedInConfigBuilder`]: a builder for [`LinkedInConfig`]
//! - [`ApiKey`], [`ApiSecretKey`], [`AccessToken`]: validated credentials
//! - [`ApiBaseUrl`]: a validated, slash-terminated base URL
//!
//! # Example
//!
//! ```rust
//! use linkedin_channel::LinkedInConfig;
//!
//! let config = LinkedInConfig::builder()
//!     .user_agent_prefix("CampaignChain/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url().as_ref(), "https://api.linkedin.com/v1/");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiBaseUrl, ApiKey, ApiSecretKey};

use std::time::Duration;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default LinkedIn REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v1/";

/// Default LinkedIn OAuth 2.0 endpoint.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2/";

/// Scopes requested when connecting a LinkedIn account.
pub const DEFAULT_SCOPES: &str = "rw_company_admin r_emailaddress r_basicprofile w_share";

/// Configuration shared by every connection built for the LinkedIn channel.
///
/// Application credentials are not part of the config. They are looked up per
/// request through an [`ApplicationStore`](crate::auth::ApplicationStore).
///
/// # Example
///
/// ```rust
/// use linkedin_channel::{ApiBaseUrl, LinkedInConfig};
///
/// let config = LinkedInConfig::builder()
///     .api_base_url(ApiBaseUrl::new("http://localhost:9000/v1").unwrap())
///     .user_update_fallback(true)
///     .build()
///     .unwrap();
///
/// assert!(config.user_update_fallback());
/// ```
#[derive(Clone, Debug)]
pub struct LinkedInConfig {
    api_base_url: ApiBaseUrl,
    auth_base_url: ApiBaseUrl,
    scopes: AuthScopes,
    user_agent_prefix: Option<String>,
    user_update_fallback: bool,
    timeout: Option<Duration>,
}

impl LinkedInConfig {
    /// Creates a new builder for constructing a `LinkedInConfig`.
    #[must_use]
    pub fn builder() -> LinkedInConfigBuilder {
        LinkedInConfigBuilder::new()
    }

    /// Returns the REST API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    /// Returns the OAuth base URL.
    #[must_use]
    pub const fn auth_base_url(&self) -> &ApiBaseUrl {
        &self.auth_base_url
    }

    /// Returns the OAuth scopes requested at login.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether user update statistics short-circuit to an empty result.
    ///
    /// The `people/~/network/updates` endpoint is unreliable upstream; when
    /// this flag is set no request is made for it at all.
    #[must_use]
    pub const fn user_update_fallback(&self) -> bool {
        self.user_update_fallback
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        LinkedInConfigBuilder::new().into_config()
    }
}

// Verify LinkedInConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInConfig>();
};

/// Builder for constructing [`LinkedInConfig`] instances.
///
/// # Defaults
///
/// - `api_base_url`: [`DEFAULT_API_BASE_URL`]
/// - `auth_base_url`: [`DEFAULT_AUTH_BASE_URL`]
/// - `scopes`: [`DEFAULT_SCOPES`]
/// - `user_update_fallback`: `false`
/// - `user_agent_prefix`, `timeout`: `None`
#[derive(Debug, Default)]
pub struct LinkedInConfigBuilder {
    api_base_url: Option<ApiBaseUrl>,
    auth_base_url: Option<ApiBaseUrl>,
    scopes: Option<AuthScopes>,
    user_agent_prefix: Option<String>,
    user_update_fallback: Option<bool>,
    timeout: Option<Duration>,
}

impl LinkedInConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the REST API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the OAuth base URL.
    #[must_use]
    pub fn auth_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.auth_base_url = Some(url);
        self
    }

    /// Sets the OAuth scopes requested at login.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Enables or disables the empty-result fallback for user update statistics.
    #[must_use]
    pub const fn user_update_fallback(mut self, enabled: bool) -> Self {
        self.user_update_fallback = Some(enabled);
        self
    }

    /// Sets a timeout applied to every request made by built clients.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`LinkedInConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScopes`] if an empty scope set was supplied.
    pub fn build(self) -> Result<LinkedInConfig, ConfigError> {
        if self.scopes.as_ref().is_some_and(AuthScopes::is_empty) {
            return Err(ConfigError::InvalidScopes {
                reason: "at least one scope must be requested".to_string(),
            });
        }
        Ok(self.into_config())
    }

    fn into_config(self) -> LinkedInConfig {
        LinkedInConfig {
            api_base_url: self.api_base_url.unwrap_or_else(default_api_base_url),
            auth_base_url: self.auth_base_url.unwrap_or_else(default_auth_base_url),
            scopes: self.scopes.unwrap_or_else(AuthScopes::linkedin_default),
            user_agent_prefix: self.user_agent_prefix,
            user_update_fallback: self.user_update_fallback.unwrap_or(false),
            timeout: self.timeout,
        }
    }
}

fn default_api_base_url() -> ApiBaseUrl {
    ApiBaseUrl::from_static(DEFAULT_API_BASE_URL, "api.linkedin.com")
}

fn default_auth_base_url() -> ApiBaseUrl {
    ApiBaseUrl::from_static(DEFAULT_AUTH_BASE_URL, "www.linkedin.com")
}
