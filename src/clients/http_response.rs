//! HTTP response type.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::errors::ApiCallError;

/// A decoded LinkedIn response.
///
/// Header names are lowercased. An empty body decodes to `{}`; a body
/// that is not JSON is kept as a string value.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, lowercased, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// Decoded body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `x-li-uuid` request id LinkedIn attaches to every response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-li-uuid")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the message to report for a failed response.
    ///
    /// LinkedIn errors look like `{"errorCode":0,"message":"...","status":401}`.
    /// Falls back to the raw body, then to a generic status text.
    #[must_use]
    pub fn error_message(&self) -> String {
        match &self.body {
            Value::Object(map) => map
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| Value::Object(map.clone()).to_string(), String::from),
            Value::String(raw) if !raw.is_empty() => raw.clone(),
            Value::Null => format!("HTTP status {}", self.code),
            other => other.to_string(),
        }
    }

    /// Converts a failed response into an [`ApiCallError`].
    #[must_use]
    pub fn to_error(&self) -> ApiCallError {
        ApiCallError {
            status: self.code,
            message: self.error_message(),
            error_reference: self.request_id().map(String::from),
        }
    }

    /// Consumes the response, returning its body as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiCallError`] carrying this response's status if the
    /// body is not an object.
    pub fn into_object(self) -> Result<Map<String, Value>, ApiCallError> {
        let code = self.code;
        let error_reference = self.request_id().map(String::from);
        match self.body {
            Value::Object(map) => Ok(map),
            other => Err(ApiCallError {
                status: code,
                message: format!("Expected a JSON object, received: {other}"),
                error_reference,
            }),
        }
    }
}
