use axum::extract::State;
use pantry_core::domain::recipe::{entities::Recipe, ports::RecipeService};

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
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
    path = "/generate-recipe",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Generates a recipe from a list of ingredients, or updates a previous recipe when `isFollowUp` is set.",
    responses(
        (status = 200, body = Recipe),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse),
        (status = 504, body = ApiErrorResponse)
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipe))
}
