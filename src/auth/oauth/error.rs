//! OAuth-specific error types.
//!
//! # Example
//!
//! ```rust
//! use linkedin_channel::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors raised while building an authorization request or checking its callback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuthError {
    /// No scopes were available to request.
    #[error("Authorization request needs at least one scope")]
    InvalidScopes,

    /// The callback's `state` differs from the one issued by `begin_auth`.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state value that was issued.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },

    /// Callback parameters are missing or empty.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// What is wrong with the callback.
        reason: String,
    },

    /// The member declined, or LinkedIn refused the request.
    #[error("Authorization denied: {error}{}", suffix(.description))]
    AuthorizationDenied {
        /// The `error` code LinkedIn returned, e.g. `user_cancelled_authorize`.
        error: String,
        /// The accompanying `error_description`, if any.
        description: Option<String>,
    },
}

fn suffix(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
