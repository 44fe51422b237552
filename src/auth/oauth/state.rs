//! CSRF state for the LinkedIn authorization request.
//!
//! A [`StateParam`] is issued by [`begin_auth`](super::begin_auth), kept in
//! the caller's session, and compared against the `state` LinkedIn echoes
//! back on the redirect. It can also carry a small payload (for example the
//! wizard's return route) as base64-encoded JSON next to the nonce.

use base64::prelude::*;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// OAuth `state` value: a random nonce, optionally with embedded data.
///
/// # Example
///
/// ```rust
/// use linkedin_channel::auth::oauth::StateParam;
///
/// let state = StateParam::with_data(&"/campaignchain/channels/new");
/// assert_eq!(state.extract_nonce().len(), 15);
/// assert_eq!(
///     state.extract_data::<String>().as_deref(),
///     Some("/campaignchain/channels/new")
/// );
/// assert!(state.matches(state.as_ref()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
    is_structured: bool,
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    nonce: String,
    data: T,
}

#[derive(Deserialize)]
struct NonceOnly {
    nonce: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    fn nonce() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Creates a state holding only a fresh 15-character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Self::nonce(),
            is_structured: false,
        }
    }

    /// Creates a state embedding `data` next to a fresh nonce.
    #[must_use]
    pub fn with_data<T: Serialize>(data: &T) -> Self {
        let envelope = Envelope {
            nonce: Self::nonce(),
            data,
        };
        let json = serde_json::to_string(&envelope).unwrap_or_default();

        Self {
            value: BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()),
            is_structured: true,
        }
    }

    /// Wraps a state string received from a callback or loaded from a session.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let value = raw.into();
        let is_structured = Self::decode::<NonceOnly>(&value).is_some();
        Self {
            value,
            is_structured,
        }
    }

    fn decode<T: DeserializeOwned>(value: &str) -> Option<T> {
        let decoded = BASE64_URL_SAFE_NO_PAD.decode(value.as_bytes()).ok()?;
        serde_json::from_slice(&decoded).ok()
    }

    /// Returns the embedded data, or `None` for plain nonces and type mismatches.
    #[must_use]
    pub fn extract_data<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.is_structured {
            return None;
        }
        Self::decode::<Envelope<T>>(&self.value).map(|envelope| envelope.data)
    }

    /// Returns the nonce, decoding it out of a structured state if needed.
    #[must_use]
    pub fn extract_nonce(&self) -> String {
        if self.is_structured {
            if let Some(only) = Self::decode::<NonceOnly>(&self.value) {
                return only.nonce;
            }
        }
        self.value.clone()
    }

    /// Compares `received` against this state in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        self.value.as_bytes().ct_eq(received.as_bytes()).into()
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
