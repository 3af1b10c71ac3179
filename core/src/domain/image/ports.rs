use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{entities::GeneratedImage, value_objects::GenerateImageInput},
};

/// Service trait for food image generation
pub trait ImageService: Send + Sync {
    fn generate_image(
        &self,
        input: GenerateImageInput,
    ) -> impl Future<Output = Result<GeneratedImage, CoreError>> + Send;
}
