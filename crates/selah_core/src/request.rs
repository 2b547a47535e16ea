//! Request and response types exchanged with a generation backend.

use serde::{Deserialize, Serialize};

/// Single-turn generation request.
///
/// # Examples
///
/// ```
/// use selah_core::GenerateRequest;
/// use serde_json::json;
///
/// let request = GenerateRequest {
///     prompt: "Recommend a color tone for Psalm 23".to_string(),
///     response_schema: Some(json!({ "type": "OBJECT" })),
///     model: None,
/// };
///
/// assert!(request.expects_json());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The full instruction text
    pub prompt: String,
    /// Schema the reply must follow; `None` requests free text
    pub response_schema: Option<serde_json::Value>,
    /// Model override; the backend default is used when `None`
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Plain text request with no schema.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Whether a JSON reply was requested.
    pub fn expects_json(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// Raw reply from a generation backend.
///
/// `text` is `None` when the service answered without any text part.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Concatenated text of the reply
    pub text: Option<String>,
}
