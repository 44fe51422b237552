//! Redirect callback handling.
//!
//! LinkedIn redirects back with either `code` and `state`, or with `error`,
//! `error_description` and `state` when the member declines.

use serde::Deserialize;

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;

/// Query parameters of the authorization redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthQuery {
    /// Authorization code to exchange for a token.
    #[serde(default)]
    pub code: Option<String>,
    /// Echoed state value.
    #[serde(default)]
    pub state: Option<String>,
    /// Error code when authorization failed.
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable reason for `error`.
    #[serde(default)]
    pub error_description: Option<String>,
}

impl AuthQuery {
    /// Parses a raw query string such as `code=abc&state=xyz`.
    ///
    /// Unknown keys are ignored and values are percent-decoded. A leading
    /// `?` is allowed.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = urlencoding::decode(&value)
                .map_or_else(|_| value.clone(), std::borrow::Cow::into_owned);

            let slot = match key {
                "code" => &mut parsed.code,
                "state" => &mut parsed.state,
                "error" => &mut parsed.error,
                "error_description" => &mut parsed.error_description,
                _ => continue,
            };
            *slot = Some(value);
        }

        parsed
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Checks an authorization redirect and returns the authorization code.
///
/// # Errors
///
/// - [`OAuthError::AuthorizationDenied`] if LinkedIn reported an `error`
/// - [`OAuthError::InvalidCallback`] if `code` or `state` is missing
/// - [`OAuthError::StateMismatch`] if `state` differs from `expected_state`
///
/// # Example
///
/// ```rust
/// use linkedin_channel::auth::oauth::{validate_callback, AuthQuery, StateParam};
///
/// let issued = StateParam::from_raw("n0nce");
/// let query = AuthQuery::from_query_string("code=AQT1&state=n0nce");
/// assert_eq!(validate_callback(&query, &issued).unwrap(), "AQT1");
/// ```
pub fn validate_callback(query: &AuthQuery, expected_state: &StateParam) -> Result<String, OAuthError> {
    if let Some(error) = non_empty(query.error.as_ref()) {
        tracing::warn!(error, "authorization was denied");
        return Err(OAuthError::AuthorizationDenied {
            error: error.to_string(),
            description: query.error_description.clone(),
        });
    }

    let state = non_empty(query.state.as_ref()).ok_or_else(|| OAuthError::InvalidCallback {
        reason: "missing state parameter".to_string(),
    })?;
    let code = non_empty(query.code.as_ref()).ok_or_else(|| OAuthError::InvalidCallback {
        reason: "missing code parameter".to_string(),
    })?;

    if !expected_state.matches(state) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.to_string(),
            received: state.to_string(),
        });
    }

    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_string_decodes_values() {
        let query = AuthQuery::from_query_string(
            "?error=user_cancelled_login&error_description=The+user%20cancelled&state=s1&extra=1",
        );
        assert_eq!(query.error.as_deref(), Some("user_cancelled_login"));
        assert_eq!(query.error_description.as_deref(), Some("The user cancelled"));
        assert_eq!(query.state.as_deref(), Some("s1"));
        assert!(query.code.is_none());
    }

    #[test]
    fn test_validate_callback_returns_code() {
        let state = StateParam::new();
        let query = AuthQuery {
            code: Some("AQTx".to_string()),
            state: Some(state.to_string()),
            ..AuthQuery::default()
        };
        assert_eq!(validate_callback(&query, &state).unwrap(), "AQTx");
    }

    #[test]
    fn test_validate_callback_reports_denial_first() {
        let state = StateParam::from_raw("s1");
        let query = AuthQuery::from_query_string("error=access_denied&state=other");
        assert_eq!(
            validate_callback(&query, &state).unwrap_err(),
            OAuthError::AuthorizationDenied {
                error: "access_denied".to_string(),
                description: None,
            }
        );
    }

    #[test]
    fn test_validate_callback_requires_code_and_state() {
        let state = StateParam::from_raw("s1");

        let no_state = AuthQuery::from_query_string("code=abc");
        assert!(matches!(
            validate_callback(&no_state, &state),
            Err(OAuthError::InvalidCallback { .. })
        ));

        let empty_code = AuthQuery::from_query_string("code=&state=s1");
        assert!(matches!(
            validate_callback(&empty_code, &state),
            Err(OAuthError::InvalidCallback { .. })
        ));
    }

    #[test]
    fn test_validate_callback_rejects_state_mismatch() {
        let state = StateParam::from_raw("s1");
        let query = AuthQuery::from_query_string("code=abc&state=s2");
        assert_eq!(
            validate_callback(&query, &state).unwrap_err(),
            OAuthError::StateMismatch {
                expected: "s1".to_string(),
                received: "s2".to_string(),
            }
        );
    }
}
