//! The LinkedIn operations the channel needs.
//!
//! [`LinkedInApi`] maps each operation to one fixed v1 REST call, sends it
//! through an authenticated [`HttpClient`] and hands back the decoded JSON.
//! Every request carries `format=json`; shares additionally send
//! `x-li-format: json` with the caller's content as the body.
//!
//! | Operation | Call |
//! |---|---|
//! | [`list_companies`](LinkedInApi::list_companies) | `GET companies?is-company-admin=true` |
//! | [`company_profile`](LinkedInApi::company_profile) | `GET companies/{id}:(id,name,description,square-logo-url,website-url)` |
//! | [`share_on_company_page`](LinkedInApi::share_on_company_page) | `POST companies/{id}/shares` |
//! | [`share_on_user_page`](LinkedInApi::share_on_user_page) | `POST people/~/shares` |
//! | [`company_update`](LinkedInApi::company_update) | `GET companies/{id}/updates/key={key}` |
//! | [`user_update`](LinkedInApi::user_update) | `GET people/~/network/updates/key={key}` |

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::{
    ApiCallError, DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
};
use crate::config::LinkedInConfig;
use crate::model::{Activity, NewsItem};

/// A decoded JSON object returned by an operation.
pub type JsonObject = Map<String, Value>;

const COMPANY_PROFILE_FIELDS: &str = ":(id,name,description,square-logo-url,website-url)";

/// Operations facade over one authenticated connection.
///
/// Obtain one from [`Connector`](crate::Connector), or wrap an existing
/// [`HttpClient`] with [`LinkedInApi::new`].
///
/// # Example
///
/// ```rust,ignore
/// let api = connector.connect_by_activity(&activity)?;
/// let share = api
///     .share_on_company_page(&activity, &json!({"comment": "We are hiring!", "visibility": {"code": "anyone"}}))
///     .await?;
/// let item = NewsItem::from_share_response(&share);
/// ```
#[derive(Debug)]
pub struct LinkedInApi {
    client: HttpClient,
    user_update_fallback: bool,
}

// Verify LinkedInApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInApi>();
};

impl LinkedInApi {
    /// Wraps an authenticated client, taking behavior flags from `config`.
    #[must_use]
    pub fn new(client: HttpClient, config: &LinkedInConfig) -> Self {
        Self {
            client,
            user_update_fallback: config.user_update_fallback(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Lists the companies the member administers.
    ///
    /// Returns the `values` array when `_total` is positive, or an empty list
    /// when `_total` is zero or absent. `_total` may be a number or a
    /// numeric string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiCallError`] if the call fails, the body is not an object,
    /// or a positive `_total` comes without a `values` array.
    pub async fn list_companies(&self) -> Result<Vec<Value>, ApiCallError> {
        let request = HttpRequest::builder(HttpMethod::Get, "companies")
            .query_param("is-company-admin", "true");
        let response = self.send_raw(request).await?;
        let status = response.code;
        let request_id = response.request_id().map(str::to_string);
        let mut body = response.into_object()?;

        if !body.get("_total").is_some_and(is_positive) {
            return Ok(Vec::new());
        }

        match body.remove("values") {
            Some(Value::Array(values)) => Ok(values),
            other => {
                let mut error = ApiCallError::new(
                    status,
                    format!(
                        "Company listing reports a positive _total but 'values' is {}",
                        other.as_ref().map_or("missing", json_kind)
                    ),
                );
                error.error_reference = request_id;
                Err(error)
            }
        }
    }

    /// Fetches a company's id, name, description, logo and website.
    ///
    /// # Errors
    ///
    /// Returns [`ApiCallError`] if the call fails.
    pub async fn company_profile(&self, id: impl fmt::Display) -> Result<JsonObject, ApiCallError> {
        let path = format!("companies/{id}{COMPANY_PROFILE_FIELDS}");
        self.send(HttpRequest::builder(HttpMethod::Get, path)).await
    }

    /// Shares `content` on the company page the activity's location points at.
    ///
    /// # Errors
    ///
    /// Returns [`ApiCallError`] if the call fails.
    pub async fn share_on_company_page(
        &self,
        activity: &Activity,
        content: &Value,
    ) -> Result<JsonObject, ApiCallError> {
        let path = format!("companies/{}/shares", activity.location_identifier());
        self.send(Self::share(path, content)).await
    }

    /// Shares `content` on the authenticated member's own feed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiCallError`] if the call fails.
    pub async fn share_on_user_page(&self, content: &Value) -> Result<JsonObject, ApiCallError> {
        self.send(Self::share("people/~/shares".to_string(), content))
            .await
    }

    /// Fetches statistics for a share previously posted to a company page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiCallError`] if the call fails.
    pub async fn company_update(
        &self,
        activity: &Activity,
        news_item: &NewsItem,
    ) -> Result<JsonObject, ApiCallError> {
        let path = format!(
            "companies/{}/updates/key={}",
            activity.location_identifier(),
            news_item.update_key
        );
        self.send(HttpRequest::builder(HttpMethod::Get, path)).await
    }

    /// Fetches statistics for a share previously posted to a member feed.
    ///
    /// With [`user_update_fallback`](crate::LinkedInConfigBuilder::user_update_fallback)
    /// enabled this returns an empty object without contacting LinkedIn.
    ///
    /// # Errors
    ///
    /// Returns [`ApiCallError`] if the call fails.
    pub async fn user_update(
        &self,
        activity: &Activity,
        news_item: &NewsItem,
    ) -> Result<JsonObject, ApiCallError> {
        if self.user_update_fallback {
            tracing::warn!(
                activity = %activity.name,
                update_key = %news_item.update_key,
                "user update statistics disabled, returning empty result"
            );
            return Ok(JsonObject::new());
        }

        let path = format!("people/~/network/updates/key={}", news_item.update_key);
        self.send(HttpRequest::builder(HttpMethod::Get, path)).await
    }

    fn share(path: String, content: &Value) -> HttpRequestBuilder {
        HttpRequest::builder(HttpMethod::Post, path)
            .body(content.clone())
            .body_type(DataType::Json)
            .header("x-li-format", "json")
    }

    async fn send(&self, request: HttpRequestBuilder) -> Result<JsonObject, ApiCallError> {
        self.send_raw(request).await?.into_object()
    }

    async fn send_raw(&self, request: HttpRequestBuilder) -> Result<HttpResponse, ApiCallError> {
        let request = request
            .query_param("format", "json")
            .build()
            .map_err(|e| ApiCallError::new(0, e.to_string()))?;
        Ok(self.client.request(request).await?)
    }
}

fn is_positive(total: &Value) -> bool {
    match total {
        Value::Number(n) => n.as_f64().is_some_and(|n| n > 0.0),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| n > 0.0),
        _ => false,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
