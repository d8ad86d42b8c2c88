//! Connection-wide defaults and the factory for request builders.
//!
//! # Design
//! `Client` holds a base URL and a default header map behind a `RwLock`.
//! Setters take `&self` so one client can be shared (for example in an
//! `Arc`) and still receive a bearer token after login. `r()` copies the
//! defaults into the new builder, so a builder sees a consistent snapshot and
//! a later `set_header` never leaks into a request that is already being
//! assembled.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{find_header, upsert_header, HttpRequest, Transport, UreqTransport};
use crate::request::RequestBuilder;
use crate::response::Response;

/// Snapshot of a client's defaults, copied into every builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Defaults {
    pub(crate) base_url: String,
    pub(crate) headers: Vec<(String, String)>,
}

/// Blocking REST client with a fluent request builder.
///
/// ```no_run
/// use dorm_core::Client;
///
/// let client = Client::new();
/// client.set_base_url("https://api.example.com/");
/// let response = client.r().set_path_param("id", "42").get("/rooms/{id}")?;
/// if response.is_error() {
///     eprintln!("server said {}", response.status());
/// }
/// # Ok::<(), dorm_core::ClientError>(())
/// ```
pub struct Client {
    defaults: RwLock<Defaults>,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Client over a `ureq` transport with no timeout and an empty base URL.
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::default())
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            defaults: RwLock::new(Defaults::default()),
            transport: Box::new(transport),
        }
    }

    /// Client with the configured base URL and transport timeout.
    pub fn from_config(config: &ClientConfig) -> Self {
        let client = Self::with_transport(UreqTransport::new(config.timeout()));
        client.set_base_url(&config.base_url);
        client
    }

    /// Set the base URL prepended to relative templates. A single trailing
    /// slash is removed; nothing is validated until a request runs.
    pub fn set_base_url(&self, base_url: &str) -> &Self {
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
        self.write_defaults().base_url = base_url.to_string();
        self
    }

    /// Set a header sent with every request. Overwrites an earlier value whose
    /// name matches ignoring case.
    pub fn set_header(&self, key: impl Into<String>, value: impl Into<String>) -> &Self {
        upsert_header(&mut self.write_defaults().headers, &key.into(), &value.into());
        self
    }

    /// Attach `Authorization: Bearer <token>` to every later request.
    pub fn set_auth_token(&self, token: &str) -> &Self {
        self.set_header("Authorization", format!("Bearer {token}"))
    }

    pub fn base_url(&self) -> String {
        self.read_defaults().base_url.clone()
    }

    /// Current default value for `key`, matched ignoring case.
    pub fn header(&self, key: &str) -> Option<String> {
        find_header(&self.read_defaults().headers, key).map(str::to_string)
    }

    /// Start a new request carrying a snapshot of the current defaults.
    pub fn r(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self, self.read_defaults().clone())
    }

    pub(crate) fn send(&self, request: HttpRequest) -> Result<Response, ClientError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        match self.transport.send(&request) {
            Ok(raw) => {
                tracing::debug!(status = raw.status, bytes = raw.body.len(), "received response");
                Ok(Response::from(raw))
            }
            Err(err) => {
                tracing::warn!(method = %request.method, url = %request.url, error = %err, "request did not complete");
                Err(err)
            }
        }
    }

    // Writers only assign whole fields, so a poisoned lock still holds
    // consistent defaults.
    fn read_defaults(&self) -> RwLockReadGuard<'_, Defaults> {
        self.defaults.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_defaults(&self) -> RwLockWriteGuard<'_, Defaults> {
        self.defaults.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").field("defaults", &*self.read_defaults()).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::RecordingTransport;

    #[test]
    fn base_url_loses_one_trailing_slash() {
        let client = Client::new();
        client.set_base_url("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");

        client.set_base_url("https://api.example.com/v1//");
        assert_eq!(client.base_url(), "https://api.example.com/v1/");

        client.set_base_url("not a url");
        assert_eq!(client.base_url(), "not a url");
    }

    #[test]
    fn default_headers_are_last_write_wins() {
        let client = Client::new();
        client.set_header("X-Env", "prod").set_header("X-Env", "staging");
        assert_eq!(client.header("X-Env").as_deref(), Some("staging"));

        client.set_header("x-env", "dev");
        assert_eq!(client.header("X-ENV").as_deref(), Some("dev"));
    }

    #[test]
    fn auth_token_becomes_bearer_header() {
        let client = Client::new();
        client.set_auth_token("abc123");
        assert_eq!(client.header("Authorization").as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn builders_snapshot_defaults_at_creation() {
        let transport = RecordingTransport::ok(200, "text/plain", "");
        let log = transport.log();
        let client = Client::with_transport(transport);
        client.set_base_url("http://localhost:3000");
        client.set_header("X-Env", "prod");

        let builder = client.r();
        client.set_header("X-Env", "staging");
        client.set_base_url("http://other:1");
        builder.get("/rooms").unwrap();

        let sent = log.lock().unwrap();
        assert_eq!(sent[0].url, "http://localhost:3000/rooms");
        assert_eq!(sent[0].header("X-Env"), Some("prod"));
    }

    #[test]
    fn builders_never_mutate_client_defaults() {
        let client = Client::with_transport(RecordingTransport::ok(200, "text/plain", ""));
        client.set_base_url("http://localhost:3000").set_header("X-Env", "prod");
        client.r().set_header("X-Env", "staging").get("/rooms").unwrap();
        assert_eq!(client.header("X-Env").as_deref(), Some("prod"));
    }

    #[test]
    fn client_is_shareable_across_threads() {
        let client = Arc::new(Client::with_transport(RecordingTransport::ok(200, "text/plain", "")));
        client.set_base_url("http://localhost:3000");

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = Arc::clone(&client);
                std::thread::spawn(move || {
                    client.set_header(format!("X-Worker-{i}"), i.to_string());
                    client.r().set_path_param("id", i.to_string()).get("/rooms/{id}").unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(!handle.join().unwrap().is_error());
        }
        assert_eq!(client.header("X-Worker-3").as_deref(), Some("3"));
    }
}
