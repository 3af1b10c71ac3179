use crate::{
    domain::common::{PantryConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiClient,
};

pub type PantryService = Service<GeminiClient>;

pub fn create_service(config: PantryConfig) -> Result<PantryService, CoreError> {
    let transport = GeminiClient::new(config.llm.attempt_timeout)?;

    tracing::info!(
        text_model = %config.llm.text_model,
        image_backend = ?config.llm.image_backend,
        image_model = %config.llm.image_model,
        max_attempts = config.llm.retry.max_attempts,
        "Upstream service configured"
    );

    Ok(Service::new(config.llm, transport))
}
