use axum::extract::State;
use pantry_core::domain::image::{entities::GeneratedImage, ports::ImageService};

use crate::application::http::{
    image::validators::GenerateImageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generate-image",
    tag = "image",
    summary = "Generate a food image",
    description = "Generates a food photograph for a recipe and returns it base64 encoded.",
    responses(
        (status = 200, body = GeneratedImage),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse),
        (status = 504, body = ApiErrorResponse)
    ),
    request_body = GenerateImageValidator
)]
pub async fn generate_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateImageValidator>,
) -> Result<Response<GeneratedImage>, ApiError> {
    let image = state
        .service
        .generate_image(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(image))
}
