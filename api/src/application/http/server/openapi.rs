use crate::application::http::{
    health::__path_health, image::router::ImageApiDoc, recipe::router::RecipeApiDoc,
    server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry API"
    ),
    paths(health, get_config),
    nest(
        (path = "/api", api = RecipeApiDoc),
        (path = "/api", api = ImageApiDoc),
    )
)]
pub struct ApiDoc;
