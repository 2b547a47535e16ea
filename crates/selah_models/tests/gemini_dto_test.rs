#![cfg(feature = "gemini")]

use selah_core::{GeminiConfig, GenerateRequest, SelahConfig};
use selah_error::GenerationErrorKind;
use selah_models::{GeminiClient, GeminiRequest, GeminiResponse};
use selah_interface::SelahDriver;
use serde_json::json;

fn gemini_config() -> GeminiConfig {
    SelahConfig::bundled().unwrap().gemini().clone()
}

#[test]
fn json_request_carries_schema_and_mime_type() -> anyhow::Result<()> {
    let request = GenerateRequest {
        prompt: "Convert John 3:16".to_string(),
        response_schema: Some(json!({ "type": "OBJECT" })),
        model: None,
    };
    let body = serde_json::to_value(GeminiRequest::from(&request))?;

    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Convert John 3:16");
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    Ok(())
}

#[test]
fn text_request_omits_generation_config() -> anyhow::Result<()> {
    let body = serde_json::to_value(GeminiRequest::from(&GenerateRequest::text("Suggest")))?;
    assert!(body.get("generationConfig").is_none());
    Ok(())
}

#[test]
fn response_text_concatenates_first_candidate() -> anyhow::Result<()> {
    let response: GeminiResponse = serde_json::from_value(json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "thinking...", "thought": true },
                        { "text": "{\"fullPrompt\":" },
                        { "text": " \"Dawn\"}" }
                    ]
                },
                "finishReason": "STOP"
            },
            { "content": { "parts": [{ "text": "ignored" }] } }
        ]
    }))?;

    assert_eq!(response.text().as_deref(), Some("{\"fullPrompt\": \"Dawn\"}"));
    Ok(())
}

#[test]
fn response_without_text_is_none() -> anyhow::Result<()> {
    let blocked: GeminiResponse =
        serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))?;
    assert_eq!(blocked.text(), None);
    assert_eq!(GeminiResponse::default().text(), None);
    Ok(())
}

#[test]
fn client_uses_configured_script_model() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key("test-key", &gemini_config())?;
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.5-pro");
    assert!(!format!("{:?}", client).contains("test-key"));
    Ok(())
}

#[tokio::test]
async fn unreachable_service_is_api_request_error() -> anyhow::Result<()> {
    let config: GeminiConfig = serde_json::from_value(json!({
        "base_url": "http://127.0.0.1:9",
        "script_model": "gemini-2.5-pro",
        "tone_model": "gemini-2.5-flash",
        "timeout_secs": 5
    }))?;
    let client = GeminiClient::with_api_key("test-key", &config)?;

    let err = client
        .generate(&GenerateRequest::text("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::ApiRequest(_)));
    Ok(())
}
