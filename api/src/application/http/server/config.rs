use axum::{Json, extract::State};
use pantry_core::domain::image::entities::ImageBackend;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

/// Upstream settings of this deployment. The credential itself is never exposed.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpstreamConfigResponse {
    pub text_model: String,
    pub image_backend: ImageBackend,
    pub image_model: String,
    pub api_key_configured: bool,
    pub max_attempts: u32,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get upstream configuration",
    responses(
        (status = 200, body = UpstreamConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<UpstreamConfigResponse> {
    let config = state.service.config();

    Json(UpstreamConfigResponse {
        text_model: config.text_model.clone(),
        image_backend: config.image_backend,
        image_model: config.image_model.clone(),
        api_key_configured: config.gemini_api_key.is_some(),
        max_attempts: config.retry.max_attempts,
    })
}
