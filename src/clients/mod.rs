//! HTTP layer for LinkedIn API communication.
//!
//! - [`HttpClient`]: an async client bound to one access token
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: one call relative to the base URL
//! - [`HttpResponse`]: status, lowercased headers and decoded JSON body
//! - [`HttpMethod`], [`DataType`]: request method and body content type
//!
//! Each call is a single round trip. Nothing is retried: a non-2xx status
//! comes back as [`HttpError::Response`] carrying an [`ApiCallError`] so the
//! caller can decide what to do.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_channel::clients::{HttpClient, HttpMethod, HttpRequest};
//! use linkedin_channel::{AccessToken, LinkedInConfig};
//!
//! let client = HttpClient::new(&LinkedInConfig::default(), &AccessToken::new("AQV...")?)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "people/~")
//!     .query_param("format", "json")
//!     .build()?;
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiCallError, ConnectionError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
