//! Application credentials and per-location access tokens.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{AccessToken, ApiKey, ApiSecretKey};
use crate::model::Location;

/// Credentials of the registered LinkedIn application.
///
/// Loaded from an [`ApplicationStore`](crate::auth::ApplicationStore) under
/// the [`RESOURCE_OWNER`](crate::auth::RESOURCE_OWNER) name; read-only here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    /// OAuth client id.
    pub key: ApiKey,
    /// OAuth client secret.
    pub secret: ApiSecretKey,
}

impl Application {
    /// Creates an application record from validated credentials.
    #[must_use]
    pub const fn new(key: ApiKey, secret: ApiSecretKey) -> Self {
        Self { key, secret }
    }
}

/// A stored OAuth grant for one location.
///
/// `token_secret` is only populated on records written during the OAuth 1.0a
/// era. It is kept so those records still load, but it is never sent: all
/// requests authenticate with a bearer header.
///
/// # Example
///
/// ```rust
/// use linkedin_channel::{AccessToken, Token};
/// use linkedin_channel::model::Location;
///
/// let mut token = Token::new(AccessToken::new("AQV...").unwrap());
/// assert!(token.is_active());
///
/// token.assign_to(&Location::user("-aB3x", "Jane Doe"));
/// assert_eq!(token.location_identifier.as_deref(), Some("-aB3x"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The OAuth access token.
    pub access_token: AccessToken,
    /// OAuth 1.0a token secret from legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_secret: Option<String>,
    /// LinkedIn identifier of the owning location, once assigned.
    #[serde(default)]
    pub location_identifier: Option<String>,
    /// When the grant expires, if LinkedIn reported a lifetime.
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

impl Token {
    /// Creates an unassigned, non-expiring token.
    #[must_use]
    pub const fn new(access_token: AccessToken) -> Self {
        Self {
            access_token,
            token_secret: None,
            location_identifier: None,
            expires: None,
        }
    }

    /// Sets the expiry time.
    #[must_use]
    pub const fn with_expiry(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Returns `true` if this token has expired.
    ///
    /// Tokens without an expiry are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if the token can still be used.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.expired()
    }

    /// Binds the token to a location.
    pub fn assign_to(&mut self, location: &Location) {
        self.location_identifier = Some(location.identifier.clone());
    }

    /// Returns `true` once the token has been bound to a location.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.location_identifier.is_some()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &self.access_token)
            .field("token_secret", &self.token_secret.as_ref().map(|_| "*****"))
            .field("location_identifier", &self.location_identifier)
            .field("expires", &self.expires)
            .finish()
    }
}

// Verify credential types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Application>();
    assert_send_sync::<Token>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token() -> Token {
        Token::new(AccessToken::new("token-value").unwrap())
    }

    #[test]
    fn test_token_expired() {
        let expired = token().with_expiry(Utc::now() - Duration::hours(1));
        assert!(expired.expired());
        assert!(!expired.is_active());

        let valid = token().with_expiry(Utc::now() + Duration::days(60));
        assert!(!valid.expired());

        assert!(!token().expired());
    }

    #[test]
    fn test_assign_to_location() {
        let mut token = token();
        assert!(!token.is_assigned());

        token.assign_to(&Location::company("555", "Acme"));
        assert!(token.is_assigned());
        assert_eq!(token.location_identifier.as_deref(), Some("555"));
    }

    #[test]
    fn test_debug_masks_secrets() {
        let mut token = token();
        token.token_secret = Some("legacy-secret".to_string());
        let debug = format!("{token:?}");
        assert!(!debug.contains("token-value"));
        assert!(!debug.contains("legacy-secret"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_legacy_record_with_token_secret_deserializes() {
        let json = r#"{"access_token":"abc","token_secret":"def","location_identifier":"555"}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token.as_ref(), "abc");
        assert_eq!(token.token_secret.as_deref(), Some("def"));
        assert!(token.expires.is_none());
    }

    #[test]
    fn test_token_serialization_omits_missing_secret() {
        let json = serde_json::to_string(&token()).unwrap();
        assert!(!json.contains("token_secret"));
        assert!(json.contains(r#""access_token":"token-value""#));
    }
}
