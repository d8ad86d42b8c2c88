//! In-memory transport for unit tests.

use std::sync::{Arc, Mutex};

use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse, Transport};

pub(crate) type RequestLog = Arc<Mutex<Vec<HttpRequest>>>;

/// Records every request and answers with a canned response.
pub(crate) struct RecordingTransport {
    log: RequestLog,
    reply: Result<HttpResponse, String>,
}

impl RecordingTransport {
    pub(crate) fn ok(status: u16, content_type: &str, body: &str) -> Self {
        Self {
            log: RequestLog::default(),
            reply: Ok(HttpResponse {
                status,
                reason: String::new(),
                version: "HTTP/1.1".to_string(),
                headers: vec![("content-type".to_string(), content_type.to_string())],
                body: body.as_bytes().to_vec(),
            }),
        }
    }

    /// Fails every request as if the connection was refused.
    pub(crate) fn refusing() -> Self {
        Self {
            log: RequestLog::default(),
            reply: Err("connection refused".to_string()),
        }
    }

    pub(crate) fn log(&self) -> RequestLog {
        Arc::clone(&self.log)
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        self.log.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err(cause) => Err(ClientError::request_failed(cause.clone())),
        }
    }
}
