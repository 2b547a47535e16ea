//! Generation service integration for Selah.
//!
//! [`ScriptGenerator`] wraps any [`SelahDriver`](selah_interface::SelahDriver)
//! and turns its raw replies into validated results. The Gemini REST backend
//! lives behind the `gemini` feature (on by default).
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use selah_core::{ParameterSet, SelahConfig};
//! use selah_models::{GeminiClient, ScriptGenerator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SelahConfig::load()?;
//! let client = GeminiClient::new(config.gemini())?;
//! let generator = ScriptGenerator::new(client, config.gemini());
//!
//! let params = ParameterSet::builder().source_text("John 3:16").build()?;
//! let script = generator.generate(&selah_prompt::compile(&params)).await?;
//! println!("{}", script.full_prompt);
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod metrics;
mod validate;

#[cfg(feature = "gemini")]
mod gemini;

pub use generator::ScriptGenerator;
pub use metrics::GenerationMetrics;
pub use validate::{parse_script, parse_tone};

#[cfg(feature = "gemini")]
pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiContent, GeminiGenerationConfig, GeminiPart,
    GeminiRequest, GeminiResponse,
};
