use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRecipeInput {
    pub is_follow_up: bool,
    pub ingredients: Vec<String>,
    pub query: Option<String>,
    pub previous_recipe: Option<Recipe>,
    pub language: Option<String>,
}
