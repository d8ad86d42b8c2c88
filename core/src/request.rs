//! Per-request state and URL assembly.
//!
//! # Design
//! A `RequestBuilder` collects body, headers, query and path parameters
//! through chained setters, then one verb method consumes it. Taking `self`
//! by value means a builder cannot be reused after it has run.
//!
//! Assembly order is fixed:
//! 1. prepend the base URL unless the template starts with `http://` or
//!    `https://`;
//! 2. substitute `{name}` placeholders (values are not encoded);
//! 3. parse the result as a URL;
//! 4. append query parameters to any query already present, then re-encode
//!    the whole query with pairs sorted by key.
//!
//! Headers are merged as: JSON content type (only when a body is set), then
//! client defaults, then request headers. Names compare case-insensitively
//! and the later writer wins.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::client::{Client, Defaults};
use crate::error::ClientError;
use crate::http::{upsert_header, HttpMethod, HttpRequest};
use crate::response::Response;
use crate::template::UrlTemplate;

/// Builder for a single request, created by [`Client::r`].
#[derive(Debug)]
#[must_use = "a request builder does nothing until a verb method is called"]
pub struct RequestBuilder<'a> {
    client: &'a Client,
    defaults: Defaults,
    body: Option<Result<Vec<u8>, serde_json::Error>>,
    headers: Vec<(String, String)>,
    query_params: BTreeMap<String, String>,
    path_params: BTreeMap<String, String>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a Client, defaults: Defaults) -> Self {
        Self {
            client,
            defaults,
            body: None,
            headers: Vec::new(),
            query_params: BTreeMap::new(),
            path_params: BTreeMap::new(),
        }
    }

    /// Set the JSON body. A serialization failure is reported when the
    /// request runs, as `ClientError::MarshalBody`.
    pub fn set_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }

    /// Set a header for this request only. Replaces an earlier value whose
    /// name matches ignoring case.
    pub fn set_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert_header(&mut self.headers, &key.into(), &value.into());
        self
    }

    pub fn set_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn set_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(key.into(), value.into());
        self
    }

    pub fn get(self, url: &str) -> Result<Response, ClientError> {
        self.execute(HttpMethod::Get, url)
    }

    pub fn post(self, url: &str) -> Result<Response, ClientError> {
        self.execute(HttpMethod::Post, url)
    }

    pub fn put(self, url: &str) -> Result<Response, ClientError> {
        self.execute(HttpMethod::Put, url)
    }

    pub fn patch(self, url: &str) -> Result<Response, ClientError> {
        self.execute(HttpMethod::Patch, url)
    }

    pub fn delete(self, url: &str) -> Result<Response, ClientError> {
        self.execute(HttpMethod::Delete, url)
    }

    /// Assemble and send the request. HTTP error statuses come back as `Ok`.
    pub fn execute(self, method: HttpMethod, url: &str) -> Result<Response, ClientError> {
        let client = self.client;
        let request = self.build(method, url)?;
        client.send(request)
    }

    /// Assemble the outgoing request without sending it.
    pub fn build(self, method: HttpMethod, url: &str) -> Result<HttpRequest, ClientError> {
        let url = self.assemble_url(url)?;
        let body = self.body.transpose().map_err(ClientError::MarshalBody)?;

        let mut headers = Vec::new();
        if body.is_some() {
            upsert_header(&mut headers, "Content-Type", "application/json");
        }
        for (key, value) in self.defaults.headers.iter().chain(&self.headers) {
            upsert_header(&mut headers, key, value);
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    fn assemble_url(&self, template: &str) -> Result<Url, ClientError> {
        let full = if has_http_scheme(template) {
            template.to_string()
        } else {
            format!("{}{}", self.defaults.base_url, template)
        };
        let expanded = UrlTemplate::parse(&full).expand(&self.path_params);

        let mut url = match Url::parse(&expanded) {
            Ok(url) => url,
            Err(source) => return Err(ClientError::InvalidUrl { url: expanded, source }),
        };

        if !self.query_params.is_empty() {
            let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            pairs.extend(self.query_params.iter().map(|(k, v)| (k.clone(), v.clone())));
            // Stable: values that share a key keep their order.
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        Ok(url)
    }
}

fn has_http_scheme(template: &str) -> bool {
    let starts_with = |prefix: &str| {
        template
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("http://") || starts_with("https://")
}
