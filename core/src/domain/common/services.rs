use tracing::warn;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    upstream::{
        caller::call_with_retry,
        entities::{UpstreamRequest, UpstreamResponse},
        ports::UpstreamTransport,
    },
};

#[derive(Clone)]
pub struct Service<T>
where
    T: UpstreamTransport,
{
    pub(crate) config: LLMConfig,
    pub(crate) transport: T,
}

impl<T> Service<T>
where
    T: UpstreamTransport,
{
    pub fn new(config: LLMConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &LLMConfig {
        &self.config
    }

    pub(crate) fn api_key(&self) -> Result<String, CoreError> {
        self.config
            .gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                tracing::error!("Gemini API key is not configured");
                CoreError::ConfigurationError
            })
    }

    /// Runs one logical upstream call under the configured deadline.
    pub(crate) async fn call_upstream(
        &self,
        request: UpstreamRequest,
    ) -> Result<UpstreamResponse, CoreError> {
        let deadline = self.config.request_deadline;

        let outcome = tokio::time::timeout(
            deadline,
            call_with_retry(&self.transport, &self.config.retry, request),
        )
        .await
        .map_err(|_| {
            warn!(deadline_ms = deadline.as_millis() as u64, "Upstream deadline exceeded");
            CoreError::UpstreamTimeout(deadline)
        })?;

        outcome.into_result()
    }
}
