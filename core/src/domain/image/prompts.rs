use crate::domain::{common::entities::app_errors::CoreError, image::value_objects::GenerateImageInput};

pub fn build_image_prompt(input: &GenerateImageInput) -> Result<String, CoreError> {
    if input.recipe_name.trim().is_empty() {
        return Err(CoreError::InvalidRequest(
            "recipeName is required".to_string(),
        ));
    }

    Ok(format!(
        "A delicious, professionally photographed plate of {}, {}. Photorealistic, food photography style, bright lighting, appetizing, high detail.",
        input.recipe_name, input.description
    ))
}
