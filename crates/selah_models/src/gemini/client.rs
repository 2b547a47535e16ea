//! Gemini REST client.

use super::dto::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use reqwest::Client;
use selah_core::{GeminiConfig, GenerateRequest, GenerateResponse};
use selah_error::{GenerationError, GenerationErrorKind, GenerationResult};
use selah_interface::SelahDriver;
use std::time::Duration;
use tracing::{debug, instrument};

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini client.
///
/// Sends exactly one HTTP request per [`generate`](SelahDriver::generate)
/// call. The model comes from the request when set, otherwise from the
/// configured script model.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` when the variable is unset or blank,
    /// `ClientCreation` when the HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip(config))]
    pub fn new(config: &GeminiConfig) -> GenerationResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// `ClientCreation` when the HTTP client cannot be built.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> GenerationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            model_name: config.script_model().clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl SelahDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model))]
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        tracing::Span::current().record("model", model);

        let url = self.endpoint(model);
        debug!(url = %url, json = req.expects_json(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GeminiRequest::from(req))
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code,
                message,
            }));
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let text = body.text();
        debug!(has_text = text.is_some(), "Gemini response received");
        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
