//! # LinkedIn channel
//!
//! Connects a marketing automation platform to LinkedIn: OAuth login,
//! choosing which profiles and company pages ("locations") to connect, and
//! a thin client over the LinkedIn v1 REST API for posting shares and
//! reading their statistics.
//!
//! ## Overview
//!
//! - [`LinkedInConfig`] / [`LinkedInConfigBuilder`]: endpoints, scopes and flags
//! - [`Connector`]: resolves stored credentials into an authenticated [`LinkedInApi`]
//! - [`LinkedInApi`]: the six LinkedIn operations, each one REST call
//! - [`auth::oauth`]: the authorization request and its callback check
//! - [`wizard`]: the location selection flow as a state machine
//! - [`model`]: locations, activities and news items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use linkedin_channel::auth::{MemoryApplicationStore, MemoryTokenStore, RESOURCE_OWNER};
//! use linkedin_channel::model::{Activity, Location};
//! use linkedin_channel::{AccessToken, ApiKey, ApiSecretKey, Application, Connector, LinkedInConfig, Token};
//! use serde_json::json;
//!
//! let apps = MemoryApplicationStore::new();
//! apps.insert(RESOURCE_OWNER, Application::new(ApiKey::new("key")?, ApiSecretKey::new("secret")?))?;
//!
//! let page = Location::company("2414183", "Acme Inc.");
//! let tokens = MemoryTokenStore::new();
//! tokens.insert(&page, Token::new(AccessToken::new("AQV...")?))?;
//!
//! let connector = Connector::new(LinkedInConfig::default(), Arc::new(apps), Arc::new(tokens));
//! let activity = Activity::new("Launch announcement", page);
//!
//! let api = connector.connect_by_activity(&activity)?;
//! let share = api
//!     .share_on_company_page(&activity, &json!({"comment": "We just launched!"}))
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! Every facade operation returns [`ApiCallError`] with the upstream status,
//! or status `0` when no response was received. Building a connection fails
//! with [`ConnectionError`]. Nothing is retried.

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod connector;
pub mod error;
pub mod model;
pub mod wizard;

// Re-export public types at crate root for convenience
pub use api::{JsonObject, LinkedInApi};
pub use auth::{Application, AuthScopes, Token};
pub use config::{AccessToken, ApiBaseUrl, ApiKey, ApiSecretKey, LinkedInConfig, LinkedInConfigBuilder};
pub use connector::Connector;
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallError, ConnectionError, DataType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{begin_auth, validate_callback, AuthQuery, BeginAuthResult, OAuthError, StateParam};
