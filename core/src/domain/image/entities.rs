use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Base64 image bytes exactly as the upstream returned them.
    pub base64_image: String,
}

/// Upstream image API flavour. Chosen per deployment; it decides both the
/// endpoint method and how the response envelope is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ImageBackend {
    /// `generateContent` with `responseModalities: ["IMAGE"]`.
    #[default]
    ContentGeneration,
    /// `predict` with `instances` / `parameters`.
    Prediction,
}

impl ImageBackend {
    pub fn method(&self) -> &'static str {
        match self {
            ImageBackend::ContentGeneration => "generateContent",
            ImageBackend::Prediction => "predict",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ImageBackend::ContentGeneration => "gemini-2.5-flash-image-preview",
            ImageBackend::Prediction => "imagen-3.0-generate-002",
        }
    }
}
