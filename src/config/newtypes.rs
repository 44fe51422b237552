//! Validated newtype wrappers for credentials and endpoints.
//!
//! Each wrapper checks its contents on construction. Secret-bearing types
//! mask their value in `Debug` output so they can sit inside logged structs.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated LinkedIn application key (the OAuth `client_id`).
///
/// # Example
///
/// ```rust
/// use linkedin_channel::ApiKey;
///
/// let key = ApiKey::new("78abc").unwrap();
/// assert_eq!(key.as_ref(), "78abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated application key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated LinkedIn application secret.
///
/// The `Debug` implementation prints `ApiSecretKey(*****)`.
///
/// ```rust
/// use linkedin_channel::ApiSecretKey;
///
/// let secret = ApiSecretKey::new("shh").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecretKey(String);

impl ApiSecretKey {
    /// Creates a new validated application secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecretKey`] if the secret is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiSecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiSecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecretKey(*****)")
    }
}

/// A validated per-location OAuth access token.
///
/// Serializes as a plain string so stored token records stay readable by
/// other tooling; `Debug` output is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty, or
    /// [`ConfigError::InvalidAccessToken`] if it contains whitespace or
    /// control characters.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigError::InvalidAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the value for an `Authorization: Bearer` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl Serialize for AccessToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL for API or authorization endpoints.
///
/// The URL must use `http` or `https` and carry a host. It is normalized
/// to end with exactly one `/`, so relative paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use linkedin_channel::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://api.linkedin.com/v1").unwrap();
/// assert_eq!(url.as_ref(), "https://api.linkedin.com/v1/");
/// assert_eq!(url.host_name(), "api.linkedin.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not http(s),
    /// the host is missing, or the URL carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
        };

        let scheme_end = trimmed.find("://").ok_or_else(invalid)?;
        let scheme = trimmed[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }
        if trimmed.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &trimmed[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(trimmed.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        let url = format!("{}/", trimmed.trim_end_matches('/'));

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Wraps a known-good, slash-terminated constant.
    pub(crate) fn from_static(url: &'static str, host: &'static str) -> Self {
        let host_start = url.find(host).unwrap_or(0);
        Self {
            url: url.to_string(),
            host_start,
            host_end: host_start + host.len(),
        }
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto this base URL.
    ///
    /// Leading slashes on `path` are dropped; the remainder is appended
    /// verbatim, so field selectors such as `:(id,name)` survive untouched.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_secret_key_masks_value_in_debug() {
        let secret = ApiSecretKey::new("super-secret-key").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ApiSecretKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_access_token_masks_value_and_builds_bearer() {
        let token = AccessToken::new("AQV-token").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
        assert_eq!(token.bearer(), "Bearer AQV-token");
    }

    #[test]
    fn test_access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("abc def"),
            Err(ConfigError::InvalidAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("abc\n"),
            Err(ConfigError::InvalidAccessToken)
        ));
    }

    #[test]
    fn test_access_token_serializes_as_plain_string() {
        let token = AccessToken::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&token).unwrap(), r#""abc""#);

        let restored: AccessToken = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(restored, token);

        let empty: Result<AccessToken, _> = serde_json::from_str(r#""""#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_base_url_normalizes_trailing_slash() {
        let url = ApiBaseUrl::new("https://api.linkedin.com/v1").unwrap();
        assert_eq!(url.as_ref(), "https://api.linkedin.com/v1/");

        let url = ApiBaseUrl::new("https://api.linkedin.com/v1//").unwrap();
        assert_eq!(url.as_ref(), "https://api.linkedin.com/v1/");
    }

    #[test]
    fn test_base_url_host_name_with_port() {
        let url = ApiBaseUrl::new("http://127.0.0.1:8080/v1/").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(ApiBaseUrl::new("api.linkedin.com/v1").is_err());
        assert!(ApiBaseUrl::new("ftp://api.linkedin.com").is_err());
        assert!(ApiBaseUrl::new("https://").is_err());
        assert!(ApiBaseUrl::new("https://api.linkedin.com/v1?x=1").is_err());
    }

    #[test]
    fn test_from_static_matches_validated_constructor() {
        let validated = ApiBaseUrl::new("https://api.linkedin.com/v1/").unwrap();
        let constant = ApiBaseUrl::from_static("https://api.linkedin.com/v1/", "api.linkedin.com");
        assert_eq!(validated, constant);
    }

    #[test]
    fn test_base_url_join_keeps_field_selector_literal() {
        let url = ApiBaseUrl::new("https://api.linkedin.com/v1/").unwrap();
        assert_eq!(
            url.join("companies/42:(id,name)"),
            "https://api.linkedin.com/v1/companies/42:(id,name)"
        );
        assert_eq!(
            url.join("/people/~/shares"),
            "https://api.linkedin.com/v1/people/~/shares"
        );
    }
}
