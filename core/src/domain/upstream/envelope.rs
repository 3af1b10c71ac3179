//! Typed views over the JSON documents returned by the upstream provider.
//!
//! Every field is optional so that parsing only fails on documents that are not
//! JSON at all; locating the payload is a separate, total step.

use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{common::entities::app_errors::CoreError, image::entities::ImageBackend};

/// Response of a `generateContent` call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGenerationEnvelope {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

/// Response of a `predict` call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEnvelope {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Image envelope, tagged by the backend the call was sent to.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageEnvelope {
    ContentGeneration(ContentGenerationEnvelope),
    Prediction(PredictionEnvelope),
}

impl ImageEnvelope {
    pub fn parse(backend: ImageBackend, body: &str) -> Result<Self, CoreError> {
        match backend {
            ImageBackend::ContentGeneration => {
                parse_envelope(body).map(ImageEnvelope::ContentGeneration)
            }
            ImageBackend::Prediction => parse_envelope(body).map(ImageEnvelope::Prediction),
        }
    }

    pub fn into_base64_image(self) -> Result<String, CoreError> {
        match self {
            ImageEnvelope::ContentGeneration(envelope) => {
                extract_inline_image(&envelope).map(str::to_string)
            }
            ImageEnvelope::Prediction(envelope) => {
                extract_prediction_image(&envelope).map(str::to_string)
            }
        }
    }
}

pub fn parse_envelope<T>(body: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse upstream envelope: {} - body: {}", e, body);
        CoreError::MalformedUpstreamResponse(format!("response body is not a valid envelope: {}", e))
    })
}

/// `candidates[0].content.parts[0].text`
pub fn extract_text(envelope: &ContentGenerationEnvelope) -> Result<&str, CoreError> {
    envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.as_deref())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            tracing::error!("Unexpected text envelope structure: {:?}", envelope);
            malformed("candidates[0].content.parts[0].text")
        })
}

/// `data` of the first part in `candidates[0].content.parts` carrying inline data.
pub fn extract_inline_image(envelope: &ContentGenerationEnvelope) -> Result<&str, CoreError> {
    envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.iter().find(|part| part.inline_data.is_some()))
        .and_then(|part| part.inline_data.as_ref())
        .and_then(|inline| inline.data.as_deref())
        .filter(|data| !data.is_empty())
        .ok_or_else(|| {
            tracing::error!("Invalid image envelope structure: {:?}", envelope);
            malformed("candidates[0].content.parts[*].inlineData.data")
        })
}

/// `predictions[0].bytesBase64Encoded`
pub fn extract_prediction_image(envelope: &PredictionEnvelope) -> Result<&str, CoreError> {
    envelope
        .predictions
        .first()
        .and_then(|prediction| prediction.bytes_base64_encoded.as_deref())
        .filter(|data| !data.is_empty())
        .ok_or_else(|| {
            tracing::error!("Invalid prediction envelope structure: {:?}", envelope);
            malformed("predictions[0].bytesBase64Encoded")
        })
}

fn malformed(path: &str) -> CoreError {
    CoreError::MalformedUpstreamResponse(format!("missing {}", path))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn content_envelope(value: serde_json::Value) -> ContentGenerationEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_text() {
        let envelope = content_envelope(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":1}" }] } }]
        }));

        assert_eq!(extract_text(&envelope), Ok("{\"a\":1}"));
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let envelope = content_envelope(json!({ "candidates": [] }));

        assert!(matches!(
            extract_text(&envelope),
            Err(CoreError::MalformedUpstreamResponse(_))
        ));
    }

    #[test]
    fn test_extract_text_missing_segments() {
        for value in [
            json!({}),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "x" } }] } }] }),
        ] {
            let envelope = content_envelope(value);
            assert!(matches!(
                extract_text(&envelope),
                Err(CoreError::MalformedUpstreamResponse(_))
            ));
        }
    }

    #[test]
    fn test_extract_inline_image_skips_text_parts() {
        let envelope = content_envelope(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "x" }, { "inlineData": { "data": "ABC123" } }] }
            }]
        }));

        assert_eq!(extract_inline_image(&envelope), Ok("ABC123"));
    }

    #[test]
    fn test_extract_inline_image_accepts_snake_case() {
        let envelope = content_envelope(json!({
            "candidates": [{
                "content": { "parts": [{ "inline_data": { "mime_type": "image/png", "data": "QUJD" } }] }
            }]
        }));

        assert_eq!(extract_inline_image(&envelope), Ok("QUJD"));
    }

    #[test]
    fn test_extract_inline_image_without_inline_data() {
        let envelope = content_envelope(json!({
            "candidates": [{ "content": { "parts": [{ "text": "no image for you" }] } }]
        }));

        assert!(matches!(
            extract_inline_image(&envelope),
            Err(CoreError::MalformedUpstreamResponse(_))
        ));
    }

    #[test]
    fn test_extract_prediction_image() {
        let envelope: PredictionEnvelope =
            serde_json::from_value(json!({ "predictions": [{ "bytesBase64Encoded": "XYZ789" }] }))
                .unwrap();

        assert_eq!(extract_prediction_image(&envelope), Ok("XYZ789"));
    }

    #[test]
    fn test_extract_prediction_image_without_predictions() {
        let envelope: PredictionEnvelope = serde_json::from_value(json!({})).unwrap();

        assert!(matches!(
            extract_prediction_image(&envelope),
            Err(CoreError::MalformedUpstreamResponse(_))
        ));
    }

    #[test]
    fn test_image_envelope_uses_configured_backend_only() {
        let body = r#"{"predictions":[{"bytesBase64Encoded":"XYZ789"}]}"#;

        let prediction = ImageEnvelope::parse(ImageBackend::Prediction, body).unwrap();
        assert_eq!(prediction.into_base64_image(), Ok("XYZ789".to_string()));

        // A prediction body read as a content-generation envelope has no candidates.
        let content = ImageEnvelope::parse(ImageBackend::ContentGeneration, body).unwrap();
        assert!(matches!(
            content.into_base64_image(),
            Err(CoreError::MalformedUpstreamResponse(_))
        ));
    }

    #[test]
    fn test_parse_envelope_rejects_non_json() {
        let result: Result<ContentGenerationEnvelope, _> = parse_envelope("<html>502</html>");

        assert!(matches!(
            result,
            Err(CoreError::MalformedUpstreamResponse(_))
        ));
    }
}
