//! OAuth 2.0 authorization request for connecting a LinkedIn account.
//!
//! The channel only drives the first half of the flow: it sends the member
//! to LinkedIn with a CSRF [`StateParam`] and checks the redirect that comes
//! back. Exchanging the returned code for a [`Token`](crate::auth::Token) is
//! left to the hosting platform's login service.
//!
//! ```rust
//! use linkedin_channel::auth::oauth::{begin_auth, validate_callback, AuthQuery};
//! use linkedin_channel::{ApiKey, ApiSecretKey, Application, LinkedInConfig};
//!
//! let config = LinkedInConfig::default();
//! let app = Application::new(ApiKey::new("id").unwrap(), ApiSecretKey::new("secret").unwrap());
//! let started = begin_auth(&config, &app, "https://chain.example.com/login", None).unwrap();
//!
//! // ... LinkedIn redirects back ...
//! let query = AuthQuery::from_query_string(&format!("code=AQT1&state={}", started.state));
//! let code = validate_callback(&query, &started.state).unwrap();
//! assert_eq!(code, "AQT1");
//! ```

mod begin_auth;
mod callback;
mod error;
mod state;

pub use begin_auth::{begin_auth, BeginAuthResult};
pub use callback::{validate_callback, AuthQuery};
pub use error::OAuthError;
pub use state::StateParam;
