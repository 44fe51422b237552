//! Authorization URL generation.
//!
//! [`begin_auth`] is the first leg of the LinkedIn OAuth 2.0 authorization
//! code flow: it issues a [`StateParam`] and the URL the member is sent to.
//!
//! # Example
//!
//! ```rust
//! use linkedin_channel::auth::oauth::begin_auth;
//! use linkedin_channel::{ApiKey, ApiSecretKey, Application, LinkedInConfig};
//!
//! let config = LinkedInConfig::default();
//! let app = Application::new(ApiKey::new("client-id").unwrap(), ApiSecretKey::new("s").unwrap());
//!
//! let result = begin_auth(&config, &app, "https://chain.example.com/login", None).unwrap();
//! assert!(result.auth_url.starts_with("https://www.linkedin.com/oauth/v2/authorization?"));
//! // Keep result.state in the session, redirect to result.auth_url.
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::{Application, AuthScopes};
use crate::config::LinkedInConfig;

/// The authorization URL and the state that must come back with the callback.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// Where to redirect the member.
    pub auth_url: String,
    /// The state to store and later pass to [`validate_callback`](super::validate_callback).
    pub state: StateParam,
}

/// Builds the LinkedIn authorization URL.
///
/// Scopes default to the configured set; `scope_override` replaces them.
///
/// # Errors
///
/// Returns [`OAuthError::InvalidScopes`] if the effective scope set is empty.
pub fn begin_auth(
    config: &LinkedInConfig,
    application: &Application,
    redirect_uri: &str,
    scope_override: Option<&AuthScopes>,
) -> Result<BeginAuthResult, OAuthError> {
    let scopes = scope_override.unwrap_or_else(|| config.scopes());
    if scopes.is_empty() {
        return Err(OAuthError::InvalidScopes);
    }

    let state = StateParam::new();
    let params = [
        ("response_type", "code".to_string()),
        ("client_id", application.key.as_ref().to_string()),
        ("redirect_uri", redirect_uri.to_string()),
        ("state", state.to_string()),
        ("scope", scopes.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!("{}?{query_string}", config.auth_base_url().join("authorization"));
    tracing::debug!(host = config.auth_base_url().host_name(), "built authorization url");

    Ok(BeginAuthResult { auth_url, state })
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};
