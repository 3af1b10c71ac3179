use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated recipe. Same shape for the upstream output schema and for the
/// recipe a follow-up request modifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
