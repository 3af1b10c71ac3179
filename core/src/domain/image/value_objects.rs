#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateImageInput {
    pub recipe_name: String,
    pub description: String,
}
