use pantry_core::domain::recipe::{entities::Recipe, value_objects::GenerateRecipeInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    pub is_follow_up: bool,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub previous_recipe: Option<Recipe>,

    #[serde(default)]
    #[schema(example = "English")]
    pub language: Option<String>,
}

impl From<GenerateRecipeValidator> for GenerateRecipeInput {
    fn from(request: GenerateRecipeValidator) -> Self {
        GenerateRecipeInput {
            is_follow_up: request.is_follow_up,
            ingredients: request.ingredients,
            query: request.query,
            previous_recipe: request.previous_recipe,
            language: request.language,
        }
    }
}
