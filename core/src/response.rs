//! Materialized view of a completed exchange.
//!
//! # Design
//! A `Response` is built once from an `HttpResponse` and never changes. The
//! body is already in memory, so every accessor is cheap and infallible.
//! JSON bodies are parsed eagerly; a body that claims to be JSON but does not
//! parse is kept as a JSON string instead of failing the request.

use std::borrow::Cow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::http::{find_header, HttpResponse};

/// Immutable snapshot of one HTTP response.
///
/// Serializes (without the raw bytes) so it can be handed to a UI layer
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    status: String,
    status_code: u16,
    proto: String,
    headers: Vec<(String, String)>,
    content_length: Option<u64>,
    #[serde(skip)]
    body: Vec<u8>,
    parsed_body: Option<Value>,
}

impl Response {
    /// Status line without the protocol, e.g. `"404 Not Found"`.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Protocol version, e.g. `"HTTP/1.1"`.
    pub fn proto(&self) -> &str {
        &self.proto
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Value of the `Content-Length` header, if present and numeric.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Eagerly parsed JSON body.
    ///
    /// `None` when the response is not JSON or is empty. When the content type
    /// says JSON but parsing failed, this is `Value::String` holding the raw
    /// body.
    pub fn parsed_body(&self) -> Option<&Value> {
        self.parsed_body.as_ref()
    }

    /// True for any status of 400 or above.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Decode the buffered body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(ClientError::DecodeBody)
    }
}

impl From<HttpResponse> for Response {
    fn from(raw: HttpResponse) -> Self {
        let status = if raw.reason.is_empty() {
            raw.status.to_string()
        } else {
            format!("{} {}", raw.status, raw.reason)
        };
        let content_length = find_header(&raw.headers, "content-length").and_then(|v| v.trim().parse().ok());
        let parsed_body = parse_json_body(&raw.headers, &raw.body);

        Self {
            status,
            status_code: raw.status,
            proto: raw.version,
            headers: raw.headers,
            content_length,
            body: raw.body,
            parsed_body,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

fn parse_json_body(headers: &[(String, String)], body: &[u8]) -> Option<Value> {
    let is_json = find_header(headers, "content-type").is_some_and(|ct| ct.contains("application/json"));
    if !is_json || body.is_empty() {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "JSON response body did not parse, keeping raw text");
            Some(Value::String(String::from_utf8_lossy(body).into_owned()))
        }
    }
}
