//! Authentication types for the LinkedIn channel.
//!
//! # Overview
//!
//! - [`Application`]: the registered LinkedIn app (client id and secret)
//! - [`Token`]: an OAuth grant, optionally bound to a location
//! - [`AuthScopes`]: the permission set requested during authorization
//! - [`ApplicationStore`] / [`TokenStore`]: lookup seams injected into the
//!   [`Connector`](crate::Connector)
//! - [`oauth`]: building the authorization request and checking its callback
//!
//! # Example
//!
//! ```rust
//! use linkedin_channel::auth::{MemoryApplicationStore, RESOURCE_OWNER};
//! use linkedin_channel::{ApiKey, ApiSecretKey, Application};
//!
//! let apps = MemoryApplicationStore::new();
//! apps.insert(
//!     RESOURCE_OWNER,
//!     Application::new(ApiKey::new("key").unwrap(), ApiSecretKey::new("secret").unwrap()),
//! )
//! .unwrap();
//! ```

mod credentials;
pub mod oauth;
mod scopes;
mod store;

pub use credentials::{Application, Token};
pub use scopes::AuthScopes;
pub use store::{ApplicationStore, MemoryApplicationStore, MemoryTokenStore, StoreError, TokenStore};

/// Name under which the LinkedIn application is registered.
pub const RESOURCE_OWNER: &str = "LinkedIn";
