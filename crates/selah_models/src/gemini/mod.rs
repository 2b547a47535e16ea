//! Google Gemini REST backend.
//!
//! Talks to `models/{model}:generateContent` directly over HTTPS. Requests
//! carrying a schema ask for `application/json` replies.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse,
};
