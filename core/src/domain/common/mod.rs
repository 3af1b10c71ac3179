use std::time::Duration;

use crate::domain::{image::entities::ImageBackend, upstream::retry::RetryPolicy};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

#[derive(Clone, Debug)]
pub struct PantryConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub text_model: String,
    pub image_backend: ImageBackend,
    pub image_model: String,
    pub retry: RetryPolicy,
    /// Transport timeout for a single attempt. Expiry counts as a network failure.
    pub attempt_timeout: Duration,
    /// Upper bound for a whole upstream call, retries and backoff included.
    pub request_deadline: Duration,
}

impl Default for LLMConfig {
    fn default() -> Self {
        let image_backend = ImageBackend::default();

        Self {
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_backend,
            image_model: image_backend.default_model().to_string(),
            retry: RetryPolicy::default(),
            attempt_timeout: Duration::from_secs(60),
            request_deadline: Duration::from_secs(120),
        }
    }
}

impl LLMConfig {
    /// `{base}/models/{model}:{method}`
    pub fn model_endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.gemini_base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    pub fn text_endpoint(&self) -> String {
        self.model_endpoint(&self.text_model, "generateContent")
    }

    pub fn image_endpoint(&self) -> String {
        self.model_endpoint(&self.image_model, self.image_backend.method())
    }
}
