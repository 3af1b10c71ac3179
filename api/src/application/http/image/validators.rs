use pantry_core::domain::image::value_objects::GenerateImageInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageValidator {
    #[serde(default)]
    #[schema(example = "Egg Fried Rice")]
    #[validate(length(min = 1, message = "recipeName is required"))]
    pub recipe_name: String,

    #[serde(default)]
    pub description: String,
}

impl From<GenerateImageValidator> for GenerateImageInput {
    fn from(request: GenerateImageValidator) -> Self {
        GenerateImageInput {
            recipe_name: request.recipe_name,
            description: request.description,
        }
    }
}
