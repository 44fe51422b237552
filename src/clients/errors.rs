//! Error types for the HTTP layer and the operations built on it.
//!
//! - [`HttpError`]: everything [`HttpClient::request`](super::HttpClient::request) can fail with
//! - [`ApiCallError`]: the single error every facade operation returns
//! - [`ConnectionError`]: building a connection failed
//! - [`InvalidHttpRequestError`]: a request failed its own validation

use thiserror::Error;

use crate::auth::StoreError;
use crate::error::ConfigError;

/// A LinkedIn call failed.
///
/// `status` is the upstream HTTP status, or `0` when no response was
/// received (transport failure or a request rejected before sending).
///
/// # Example
///
/// ```rust
/// use linkedin_channel::ApiCallError;
///
/// let error = ApiCallError::new(401, "Invalid access token.");
/// assert!(error.is_unauthorized());
/// assert_eq!(error.to_string(), "LinkedIn API call failed (401): Invalid access token.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("LinkedIn API call failed ({status}): {message}")]
pub struct ApiCallError {
    /// HTTP status, `0` if no response arrived.
    pub status: u16,
    /// Upstream error message or transport description.
    pub message: String,
    /// The `x-li-uuid` request id, when LinkedIn sent one.
    pub error_reference: Option<String>,
}

impl ApiCallError {
    /// Creates an error without a request id.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error_reference: None,
        }
    }

    /// Returns `true` if the token was rejected.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns `true` if no HTTP response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        self.status == 0
    }
}

/// A request was malformed before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was given without a body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The offending method.
        method: String,
    },
}

/// Failure of a single HTTP exchange.
#[derive(Debug, Error)]
pub enum HttpError {
    /// LinkedIn answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] ApiCallError),

    /// The request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request could not be sent or the response not read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<HttpError> for ApiCallError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => e,
            HttpError::InvalidRequest(e) => Self::new(0, e.to_string()),
            HttpError::Network(e) => Self::new(0, e.to_string()),
        }
    }
}

/// Building an authenticated connection failed.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// A credential failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Transport(#[from] reqwest::Error),

    /// No application is registered under the resource owner name.
    #[error("No application registered for resource owner '{resource_owner}'")]
    MissingApplication {
        /// The name that was looked up.
        resource_owner: String,
    },

    /// No token is stored for the location.
    #[error("No access token stored for location '{location}'")]
    MissingToken {
        /// Identifier of the location.
        location: String,
    },

    /// A credential store failed.
    #[error("Credential store error: {0}")]
    Store(StoreError),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiCallError>();
    assert_send_sync::<HttpError>();
    assert_send_sync::<ConnectionError>();
};
