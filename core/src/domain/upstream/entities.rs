use std::fmt;

use thiserror::Error;

/// One outbound POST of a JSON payload to an upstream model endpoint.
#[derive(Clone, PartialEq)]
pub struct UpstreamRequest {
    pub url: String,
    pub api_key: String,
    pub payload: serde_json::Value,
}

impl UpstreamRequest {
    pub fn new(url: String, api_key: String, payload: serde_json::Value) -> Self {
        Self {
            url,
            api_key,
            payload,
        }
    }
}

impl fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamRequest")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("payload", &self.payload)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
