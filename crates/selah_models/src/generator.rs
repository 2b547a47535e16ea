//! Script and color tone generation over a driver.

use crate::{GenerationMetrics, parse_script, parse_tone};
use selah_core::{GeminiConfig, GenerateRequest, StructuredResult};
use selah_error::{GenerationError, GenerationErrorKind, GenerationResult};
use selah_interface::SelahDriver;
use selah_prompt::{Instruction, compile_tone_request};
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

const SCRIPT_OPERATION: &str = "script";
const TONE_OPERATION: &str = "tone";

/// Generation client: one request per call, no retries.
///
/// Every failure mode, from transport errors to a malformed reply, surfaces
/// as a single [`GenerationError`].
#[derive(Debug, Clone)]
pub struct ScriptGenerator<D> {
    driver: D,
    script_model: String,
    tone_model: String,
}

impl<D: SelahDriver> ScriptGenerator<D> {
    /// Use the script and tone models named in `config`.
    pub fn new(driver: D, config: &GeminiConfig) -> Self {
        Self::with_models(driver, config.script_model(), config.tone_model())
    }

    /// Use explicit model names.
    pub fn with_models(
        driver: D,
        script_model: impl Into<String>,
        tone_model: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            script_model: script_model.into(),
            tone_model: tone_model.into(),
        }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Model used for scripts.
    pub fn script_model(&self) -> &str {
        &self.script_model
    }

    /// Model used for tone recommendations.
    pub fn tone_model(&self) -> &str {
        &self.tone_model
    }

    /// Generate a structured script for a compiled instruction.
    ///
    /// # Errors
    ///
    /// `EmptyResponse` when no text comes back, `MalformedPayload` or
    /// `SchemaViolation` when the reply does not validate, or the driver's
    /// transport error.
    #[instrument(skip_all, fields(provider = self.driver.provider_name(), model = %self.script_model))]
    pub async fn generate(&self, instruction: &Instruction) -> GenerationResult<StructuredResult> {
        let request = instruction.to_request(Some(self.script_model.clone()));
        let started = Instant::now();

        let outcome = async {
            let text = self.send(&request).await?;
            parse_script(&text)
        }
        .await;

        self.record(&self.script_model, SCRIPT_OPERATION, started, &outcome);
        match &outcome {
            Ok(script) => debug!(
                characters = script.characters.len(),
                scene_cuts = script.scene_cuts.len(),
                "Script generated"
            ),
            Err(e) => error!(error = %e, "Script generation failed"),
        }
        outcome
    }

    /// Recommend a color tone for `source_text`.
    ///
    /// # Errors
    ///
    /// `EmptyResponse` when the trimmed reply is empty, or the driver's
    /// transport error.
    #[instrument(skip_all, fields(provider = self.driver.provider_name(), model = %self.tone_model))]
    pub async fn recommend_tone(&self, source_text: &str) -> GenerationResult<String> {
        let request = GenerateRequest {
            model: Some(self.tone_model.clone()),
            ..GenerateRequest::text(compile_tone_request(source_text))
        };
        let started = Instant::now();

        let outcome = async {
            let response = self.driver.generate(&request).await?;
            parse_tone(response.text.as_deref())
        }
        .await;

        self.record(&self.tone_model, TONE_OPERATION, started, &outcome);
        if let Err(e) = &outcome {
            warn!(error = %e, "Color tone recommendation failed");
        }
        outcome
    }

    async fn send(&self, request: &GenerateRequest) -> GenerationResult<String> {
        let response = self.driver.generate(request).await?;
        response
            .text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))
    }

    fn record<T>(
        &self,
        model: &str,
        operation: &str,
        started: Instant,
        outcome: &GenerationResult<T>,
    ) {
        let metrics = GenerationMetrics::get();
        let provider = self.driver.provider_name();
        metrics.record_request(provider, model, operation, started.elapsed().as_secs_f64());
        if let Err(e) = outcome {
            metrics.record_error(provider, model, operation, e.kind.label());
        }
    }
}
