use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API key is not configured")]
    ConfigurationError,

    #[error("Upstream unreachable after {attempts} attempts: {message}")]
    UpstreamUnreachable { attempts: u32, message: String },

    #[error("Upstream API error: {status} - {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Invalid response structure from upstream: {0}")]
    MalformedUpstreamResponse(String),

    #[error("Upstream payload is not a valid recipe: {0}")]
    UpstreamPayloadNotJson(String),

    #[error("Upstream did not answer within {0:?}")]
    UpstreamTimeout(Duration),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
