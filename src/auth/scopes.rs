//! OAuth scope handling for LinkedIn.
//!
//! LinkedIn expects scopes as a single space-separated string. This module
//! provides the [`AuthScopes`] type that parses, deduplicates and renders
//! them in request order.

use crate::config::DEFAULT_SCOPES;
use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered, duplicate-free set of LinkedIn OAuth scopes.
///
/// Parsing accepts spaces or commas as separators. Display always renders
/// the space-separated form LinkedIn's authorization endpoint expects.
///
/// # Example
///
/// ```rust
/// use linkedin_channel::AuthScopes;
///
/// let scopes: AuthScopes = "r_basicprofile, w_share r_basicprofile".parse().unwrap();
/// assert_eq!(scopes.to_string(), "r_basicprofile w_share");
///
/// let required: AuthScopes = "w_share".parse().unwrap();
/// assert!(scopes.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: Vec<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scopes needed to manage company pages and share as the user.
    #[must_use]
    pub fn linkedin_default() -> Self {
        let mut scopes = Self::new();
        for scope in DEFAULT_SCOPES.split(' ') {
            scopes.insert(scope);
        }
        scopes
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if this scope set contains every scope in `other`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.iter().all(|s| self.scopes.contains(s))
    }

    /// Returns an iterator over the scopes in request order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    fn insert(&mut self, scope: &str) {
        if !self.scopes.iter().any(|s| s == scope) {
            self.scopes.push(scope.to_string());
        }
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = Self::new();

        for scope in s.split([' ', ',']) {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }

            if !scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }

            scopes.insert(scope);
        }

        Ok(scopes)
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scopes.join(" "))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_space_and_comma_separated() {
        let scopes: AuthScopes = "r_basicprofile w_share,rw_company_admin".parse().unwrap();
        let collected: Vec<&str> = scopes.iter().collect();
        assert_eq!(collected, vec!["r_basicprofile", "w_share", "rw_company_admin"]);
    }

    #[test]
    fn test_deduplicates_preserving_first_position() {
        let scopes: AuthScopes = "w_share r_basicprofile w_share".parse().unwrap();
        assert_eq!(scopes.to_string(), "w_share r_basicprofile");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        let result: Result<AuthScopes, _> = "w_share r-basic".parse();
        assert!(matches!(result, Err(ConfigError::InvalidScopes { .. })));
    }

    #[test]
    fn test_linkedin_default_scopes() {
        let scopes = AuthScopes::linkedin_default();
        assert_eq!(
            scopes.to_string(),
            "rw_company_admin r_emailaddress r_basicprofile w_share"
        );
    }

    #[test]
    fn test_covers() {
        let scopes = AuthScopes::linkedin_default();
        let required: AuthScopes = "w_share rw_company_admin".parse().unwrap();
        assert!(scopes.covers(&required));

        let more: AuthScopes = "w_share r_fullprofile".parse().unwrap();
        assert!(!scopes.covers(&more));
    }

    #[test]
    fn test_serializes_as_space_separated_string() {
        let scopes: AuthScopes = "r_basicprofile,w_share".parse().unwrap();
        let json = serde_json::to_string(&scopes).unwrap();
        assert_eq!(json, r#""r_basicprofile w_share""#);

        let restored: AuthScopes = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, scopes);
    }
}
