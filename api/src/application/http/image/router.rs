use super::handlers::generate_image::{__path_generate_image, generate_image};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_image))]
pub struct ImageApiDoc;

pub fn image_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/generate-image", state.args.server.root_path),
        post(generate_image),
    )
}
