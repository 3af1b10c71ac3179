use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        ports::RecipeService,
        prompts::build_recipe_prompt,
        schema::get_recipe_schema,
        value_objects::GenerateRecipeInput,
    },
    upstream::{
        entities::UpstreamRequest,
        envelope::{ContentGenerationEnvelope, extract_text, parse_envelope},
        payloads::{GenerateContentRequest, to_payload},
        ports::UpstreamTransport,
    },
};

impl<T> RecipeService for Service<T>
where
    T: UpstreamTransport,
{
    #[instrument(skip(self, input), fields(follow_up = input.is_follow_up))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        // 1. Validate and build the prompt pair
        let prompt = build_recipe_prompt(&input)?;

        // 2. Resolve credential
        let api_key = self.api_key()?;

        // 3. Call the text model
        let payload = to_payload(&GenerateContentRequest::structured(
            prompt.user_query,
            prompt.system_instruction,
            get_recipe_schema(),
        ))?;
        let response = self
            .call_upstream(UpstreamRequest::new(
                self.config.text_endpoint(),
                api_key,
                payload,
            ))
            .await?;

        // 4. Extract and parse the recipe
        let envelope: ContentGenerationEnvelope = parse_envelope(&response.body)?;
        let text = extract_text(&envelope)?;

        parse_recipe(text)
    }
}

fn parse_recipe(text: &str) -> Result<Recipe, CoreError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::error!("Failed to parse recipe payload: {} - payload: {}", e, text);
        CoreError::UpstreamPayloadNotJson(e.to_string())
    })
}
