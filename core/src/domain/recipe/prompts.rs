use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, value_objects::GenerateRecipeInput},
};

pub const DEFAULT_LANGUAGE: &str = "English";

const RECIPE_JSON_STRUCTURE: &str = r#"{
  "recipeName": "string",
  "description": "string",
  "ingredients": ["string"],
  "instructions": ["string"]
}"#;

/// Role and task instructions sent to the text model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePrompt {
    pub system_instruction: String,
    pub user_query: String,
}

enum RecipeMode<'a> {
    Ingredients(Vec<&'a str>),
    FollowUp {
        query: &'a str,
        previous_recipe: &'a Recipe,
    },
}

fn select_mode(input: &GenerateRecipeInput) -> Result<RecipeMode<'_>, CoreError> {
    if input.is_follow_up {
        let query = input
            .query
            .as_deref()
            .filter(|query| !query.trim().is_empty())
            .ok_or_else(|| {
                CoreError::InvalidRequest("query is required for a follow-up request".to_string())
            })?;
        let previous_recipe = input.previous_recipe.as_ref().ok_or_else(|| {
            CoreError::InvalidRequest(
                "previousRecipe is required for a follow-up request".to_string(),
            )
        })?;

        Ok(RecipeMode::FollowUp {
            query,
            previous_recipe,
        })
    } else {
        if input.ingredients.is_empty() {
            return Err(CoreError::InvalidRequest(
                "at least one ingredient is required".to_string(),
            ));
        }

        if let Some(position) = input
            .ingredients
            .iter()
            .position(|ingredient| ingredient.trim().is_empty())
        {
            return Err(CoreError::InvalidRequest(format!(
                "ingredients[{}] must not be blank",
                position
            )));
        }

        let ingredients: Vec<&str> = input.ingredients.iter().map(String::as_str).collect();

        Ok(RecipeMode::Ingredients(ingredients))
    }
}

fn language(input: &GenerateRecipeInput) -> &str {
    input
        .language
        .as_deref()
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Builds the prompt pair for a recipe request, rejecting requests that lack
/// the fields their mode needs.
pub fn build_recipe_prompt(input: &GenerateRecipeInput) -> Result<RecipePrompt, CoreError> {
    let language = language(input);

    match select_mode(input)? {
        RecipeMode::Ingredients(ingredients) => Ok(RecipePrompt {
            system_instruction: format!(
                "You are a creative chef who specializes in making delicious recipes from a limited set of ingredients.\n\
                 Your task is to generate a recipe based on the ingredients provided by the user.\n\
                 You can suggest common pantry staples (like oil, salt, pepper, water) to complete the dish if necessary.\n\
                 \n\
                 Your response MUST be a valid JSON object with the following structure:\n\
                 {}\n\
                 Write every value of the JSON object in {}.\n\
                 Do not include any text or formatting outside of this JSON object.",
                RECIPE_JSON_STRUCTURE, language
            ),
            user_query: format!(
                "Generate a recipe using the following ingredients: {}",
                ingredients.join(", ")
            ),
        }),
        RecipeMode::FollowUp {
            query,
            previous_recipe,
        } => {
            let serialized = serde_json::to_string_pretty(previous_recipe).map_err(|e| {
                CoreError::InternalServerError(format!("Failed to serialize recipe: {}", e))
            })?;

            Ok(RecipePrompt {
                system_instruction: format!(
                    "You are a creative chef who adapts existing recipes to the requests of the user.\n\
                     You will receive a recipe as a JSON object followed by a modification request.\n\
                     Apply the modification and return the COMPLETE updated recipe, keeping every field the request does not affect unchanged.\n\
                     \n\
                     Your response MUST be a valid JSON object with the following structure:\n\
                     {}\n\
                     Write every value of the JSON object in {}.\n\
                     Do not include any text or formatting outside of this JSON object.",
                    RECIPE_JSON_STRUCTURE, language
                ),
                user_query: format!(
                    "Here is the current recipe:\n{}\n\nModification request: {}",
                    serialized, query
                ),
            })
        }
    }
}
