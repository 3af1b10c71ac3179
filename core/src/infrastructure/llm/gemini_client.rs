use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    upstream::{
        entities::{TransportError, UpstreamRequest, UpstreamResponse},
        ports::UpstreamTransport,
    },
};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
}

impl GeminiClient {
    pub fn new(attempt_timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(attempt_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl UpstreamTransport for GeminiClient {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn post_json(
        &self,
        request: UpstreamRequest,
    ) -> Result<UpstreamResponse, TransportError> {
        let response = self
            .client
            .post(&request.url)
            .header(API_KEY_HEADER, &request.api_key)
            .json(&request.payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                TransportError::new(format!("LLM API request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read Gemini response body: {}", e);
            TransportError::new(format!("Failed to read LLM response: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!("Gemini API error: {} - {}", status, body);
        }

        Ok(UpstreamResponse::new(status.as_u16(), body))
    }
}
