//! Blocking REST client core for the dormitory management backend.
//!
//! # Overview
//! A small fluent HTTP client: a `Client` holds the base URL and default
//! headers, `Client::r()` starts a `RequestBuilder`, and one verb method
//! sends it and returns a fully buffered `Response`. The resource APIs in
//! [`api`] are thin wrappers that build one request each.
//!
//! # Design
//! - Requests run synchronously on the calling thread; there is no retry.
//! - Transport failures are `Err`; HTTP 4xx/5xx are `Ok(Response)` with
//!   `is_error()` set.
//! - The network sits behind the `Transport` trait. `UreqTransport` is the
//!   default; tests swap in an in-memory transport.
//! - `Client` is `Send + Sync`. Builders copy its defaults when created.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod template;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::Api;
pub use client::Client;
pub use config::{ClientConfig, Config, ConfigError, LoggerConfig};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use request::RequestBuilder;
pub use response::Response;
pub use template::UrlTemplate;
pub use types::{CreateRoom, Envelope, LoginData, Room, UpdateRoom};
