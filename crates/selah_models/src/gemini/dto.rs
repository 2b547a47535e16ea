//! Gemini REST data transfer objects.

use derive_getters::Getters;
use selah_core::GenerateRequest;
use serde::{Deserialize, Serialize};

const JSON_MIME_TYPE: &str = "application/json";

/// One turn of conversation content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Speaker role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Content parts
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// A single content part. Only text parts are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Set on internal reasoning parts, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

/// Output constraints for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// MIME type of the reply
    response_mime_type: String,
    /// Schema the reply must follow
    response_schema: serde_json::Value,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,
    /// Output constraints, omitted for free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

impl From<&GenerateRequest> for GeminiRequest {
    fn from(req: &GenerateRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(req.prompt.clone()),
                    thought: None,
                }],
            }],
            generation_config: req.response_schema.as_ref().map(|schema| {
                GeminiGenerationConfig {
                    response_mime_type: JSON_MIME_TYPE.to_string(),
                    response_schema: schema.clone(),
                }
            }),
        }
    }
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Candidate content, absent when generation was blocked
    #[serde(default)]
    content: Option<GeminiContent>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Reply to a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Candidate answers; only the first is read
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Concatenated answer text of the first candidate.
    ///
    /// `None` when the first candidate has no text parts.
    pub fn text(&self) -> Option<String> {
        let parts = self.candidates.first()?.content.as_ref()?.parts.iter();
        let texts: Vec<&str> = parts
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}
