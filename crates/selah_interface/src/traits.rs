//! Trait definitions for generation backends and output sinks.

use async_trait::async_trait;
use selah_core::{GenerateRequest, GenerateResponse};
use selah_error::{GenerationResult, SelahResult};

/// Core trait every generation backend implements.
///
/// A backend performs exactly one request per call. It never retries and
/// never interprets the reply beyond extracting its text.
#[async_trait]
pub trait SelahDriver: Send + Sync {
    /// Send one request and return the raw reply.
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request carries no override.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: SelahDriver + ?Sized> SelahDriver for std::sync::Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Destination for copy actions.
///
/// Copy never mutates session state, so implementations only need to place
/// the text somewhere the user can reach it.
pub trait Clipboard: Send + Sync {
    /// Place `text` on the clipboard.
    fn copy_text(&self, text: &str) -> SelahResult<()>;
}
