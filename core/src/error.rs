//! Error types for the dormitory REST client.
//!
//! # Design
//! Only failures that leave the caller without a usable response are errors:
//! a bad URL, an unserializable body, a transport failure, or a body that
//! could not be read. HTTP 4xx/5xx statuses are not errors here; they come
//! back as a normal `Response` with `is_error()` set, and classification is
//! left to the caller.

use thiserror::Error;

/// Boxed cause reported by a `Transport` implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned when building or executing a request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL joined with the template (after path substitution) does
    /// not parse as an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request body could not be serialized to JSON.
    #[error("failed to marshal body: {0}")]
    MarshalBody(#[source] serde_json::Error),

    /// DNS, connect, TLS or timeout failure. Never retried.
    #[error("request failed: {0}")]
    RequestFailed(#[source] TransportError),

    /// The response arrived but its body could not be read to the end.
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] TransportError),

    /// `Response::json` could not decode the buffered body into the target type.
    #[error("failed to decode response body: {0}")]
    DecodeBody(#[source] serde_json::Error),
}

impl ClientError {
    pub(crate) fn request_failed(err: impl Into<TransportError>) -> Self {
        ClientError::RequestFailed(err.into())
    }

    pub(crate) fn read_body(err: impl Into<TransportError>) -> Self {
        ClientError::ReadBody(err.into())
    }
}
