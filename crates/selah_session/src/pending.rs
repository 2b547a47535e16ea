//! In-flight generation work detached from the controller.
//!
//! A pending request owns everything it needs, so its `run()` future can be
//! awaited while the controller keeps accepting edits or a reset. The
//! outcome is handed back to the controller afterwards.

use selah_core::{ParameterSet, StructuredResult};
use selah_error::GenerationResult;
use selah_interface::SelahDriver;
use selah_models::ScriptGenerator;
use selah_prompt::Instruction;
use std::sync::Arc;
use tracing::instrument;

/// A script request that passed the submission guards.
#[derive(Debug)]
pub struct PendingGeneration<D> {
    generator: Arc<ScriptGenerator<D>>,
    params: ParameterSet,
    instruction: Instruction,
}

impl<D: SelahDriver> PendingGeneration<D> {
    pub(crate) fn new(generator: Arc<ScriptGenerator<D>>, params: ParameterSet) -> Self {
        let instruction = selah_prompt::compile(&params);
        Self {
            generator,
            params,
            instruction,
        }
    }

    /// Parameters captured at submission.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The compiled instruction.
    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    /// Perform the request.
    #[instrument(skip(self), fields(verse = %self.params.source_text()))]
    pub async fn run(self) -> GenerationOutcome {
        let result = self.generator.generate(&self.instruction).await;
        GenerationOutcome {
            params: self.params,
            result,
        }
    }
}

/// Finished script request, ready to be applied.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub(crate) params: ParameterSet,
    pub(crate) result: GenerationResult<StructuredResult>,
}

impl GenerationOutcome {
    /// Pair a result with the parameters it was generated from.
    pub fn new(params: ParameterSet, result: GenerationResult<StructuredResult>) -> Self {
        Self { params, result }
    }

    /// Parameters captured at submission.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The generation result.
    pub fn result(&self) -> &GenerationResult<StructuredResult> {
        &self.result
    }
}

/// A color tone request that passed its guards.
#[derive(Debug)]
pub struct PendingTone<D> {
    generator: Arc<ScriptGenerator<D>>,
    source_text: String,
    ticket: u64,
}

impl<D: SelahDriver> PendingTone<D> {
    pub(crate) fn new(
        generator: Arc<ScriptGenerator<D>>,
        source_text: String,
        ticket: u64,
    ) -> Self {
        Self {
            generator,
            source_text,
            ticket,
        }
    }

    /// Source text captured at request time.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Perform the request.
    #[instrument(skip(self), fields(verse = %self.source_text))]
    pub async fn run(self) -> ToneOutcome {
        ToneOutcome {
            result: self.generator.recommend_tone(&self.source_text).await,
            ticket: self.ticket,
        }
    }
}

/// Finished tone request, ready to be applied.
#[derive(Debug)]
pub struct ToneOutcome {
    pub(crate) result: GenerationResult<String>,
    pub(crate) ticket: u64,
}

impl ToneOutcome {

    /// The recommendation result.
    pub fn result(&self) -> &GenerationResult<String> {
        &self.result
    }
}
