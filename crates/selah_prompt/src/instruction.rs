//! Compiled instruction payload.

use derive_getters::Getters;
use selah_core::GenerateRequest;
use serde::{Deserialize, Serialize};

/// Instruction text plus the schema the reply must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Instruction {
    /// Full instruction text
    text: String,
    /// Expected response schema
    schema: serde_json::Value,
}

impl Instruction {
    pub(crate) fn new(text: String, schema: serde_json::Value) -> Self {
        Self { text, schema }
    }

    /// Build a JSON-mode request for `model`.
    pub fn to_request(&self, model: Option<String>) -> GenerateRequest {
        GenerateRequest {
            prompt: self.text.clone(),
            response_schema: Some(self.schema.clone()),
            model,
        }
    }
}
