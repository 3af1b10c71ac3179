use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    image::{
        entities::{GeneratedImage, ImageBackend},
        ports::ImageService,
        prompts::build_image_prompt,
        value_objects::GenerateImageInput,
    },
    upstream::{
        entities::UpstreamRequest,
        envelope::ImageEnvelope,
        payloads::{GenerateContentRequest, PredictRequest, to_payload},
        ports::UpstreamTransport,
    },
};

impl<T> ImageService for Service<T>
where
    T: UpstreamTransport,
{
    #[instrument(skip(self, input), fields(backend = ?self.config.image_backend))]
    async fn generate_image(&self, input: GenerateImageInput) -> Result<GeneratedImage, CoreError> {
        let prompt = build_image_prompt(&input)?;
        let api_key = self.api_key()?;

        let backend = self.config.image_backend;
        let payload = match backend {
            ImageBackend::ContentGeneration => to_payload(&GenerateContentRequest::image(prompt))?,
            ImageBackend::Prediction => to_payload(&PredictRequest::single(prompt))?,
        };

        let response = self
            .call_upstream(UpstreamRequest::new(
                self.config.image_endpoint(),
                api_key,
                payload,
            ))
            .await?;

        let base64_image = ImageEnvelope::parse(backend, &response.body)?.into_base64_image()?;

        Ok(GeneratedImage { base64_image })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::LLMConfig,
        upstream::{entities::UpstreamResponse, ports::MockUpstreamTransport},
    };

    fn config(backend: ImageBackend) -> LLMConfig {
        LLMConfig {
            gemini_api_key: Some("test-key".to_string()),
            gemini_base_url: "http://upstream.test/v1beta".to_string(),
            image_backend: backend,
            image_model: backend.default_model().to_string(),
            ..LLMConfig::default()
        }
    }

    fn input() -> GenerateImageInput {
        GenerateImageInput {
            recipe_name: "Fried Rice".to_string(),
            description: "egg fried rice with scallions".to_string(),
        }
    }

    fn recording(
        body: serde_json::Value,
    ) -> (MockUpstreamTransport, Arc<Mutex<Vec<UpstreamRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let body = body.to_string();

        let mut transport = MockUpstreamTransport::new();
        transport.expect_post_json().times(1).returning(move |request| {
            recorder.lock().unwrap().push(request);
            let body = body.clone();
            Box::pin(async move { Ok(UpstreamResponse::new(200, body)) })
        });

        (transport, seen)
    }

    #[tokio::test]
    async fn test_content_generation_backend() {
        let (transport, seen) = recording(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "x" }, { "inlineData": { "mimeType": "image/png", "data": "ABC123" } }] }
            }]
        }));
        let service = Service::new(config(ImageBackend::ContentGeneration), transport);

        let image = service.generate_image(input()).await.unwrap();

        assert_eq!(image.base64_image, "ABC123");
        let seen = seen.lock().unwrap();
        assert!(seen[0].url.ends_with("/models/gemini-2.5-flash-image-preview:generateContent"));
        assert_eq!(
            seen[0].payload["generationConfig"]["responseModalities"],
            json!(["IMAGE"])
        );
    }

    #[tokio::test]
    async fn test_prediction_backend() {
        let (transport, seen) = recording(json!({ "predictions": [{ "bytesBase64Encoded": "XYZ789" }] }));
        let service = Service::new(config(ImageBackend::Prediction), transport);

        let image = service.generate_image(input()).await.unwrap();

        assert_eq!(image.base64_image, "XYZ789");
        let seen = seen.lock().unwrap();
        assert!(seen[0].url.ends_with("/models/imagen-3.0-generate-002:predict"));
        assert_eq!(seen[0].payload["parameters"]["sampleCount"], 1);
        assert!(
            seen[0].payload["instances"][0]["prompt"]
                .as_str()
                .unwrap()
                .starts_with("A delicious, professionally photographed plate of Fried Rice")
        );
    }

    #[tokio::test]
    async fn test_prediction_without_image() {
        let (transport, _) = recording(json!({ "predictions": [] }));
        let service = Service::new(config(ImageBackend::Prediction), transport);

        assert!(matches!(
            service.generate_image(input()).await,
            Err(CoreError::MalformedUpstreamResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_recipe_name_makes_no_upstream_call() {
        let mut transport = MockUpstreamTransport::new();
        transport.expect_post_json().never();
        let service = Service::new(config(ImageBackend::ContentGeneration), transport);

        let result = service
            .generate_image(GenerateImageInput {
                recipe_name: String::new(),
                description: "mystery".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let mut transport = MockUpstreamTransport::new();
        transport.expect_post_json().never();
        let service = Service::new(
            LLMConfig {
                gemini_api_key: Some("  ".to_string()),
                ..config(ImageBackend::Prediction)
            },
            transport,
        );

        assert_eq!(
            service.generate_image(input()).await,
            Err(CoreError::ConfigurationError)
        );
    }
}
