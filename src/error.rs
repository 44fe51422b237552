//! Error types for configuration and credential validation.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! malformed credentials are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use linkedin_channel::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration or credential values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Application key cannot be empty.
    #[error("API key cannot be empty. Please provide the LinkedIn application key.")]
    EmptyApiKey,

    /// Application secret cannot be empty.
    #[error("API secret key cannot be empty. Please provide the LinkedIn application secret.")]
    EmptyApiSecretKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. The location has no usable LinkedIn grant.")]
    EmptyAccessToken,

    /// Access token contains characters that cannot travel in a header.
    #[error("Access token contains whitespace or control characters.")]
    InvalidAccessToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL with a host (e.g., 'https://api.linkedin.com/v1/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("LinkedIn application key"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nowhere".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nowhere"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
