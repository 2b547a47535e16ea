//! The session controller.

use crate::{
    EMPTY_SOURCE_MESSAGE, GENERATION_FAILED_MESSAGE, GenerationOutcome, PendingGeneration,
    PendingTone, ResultStore, SessionState, TONE_EMPTY_SOURCE_MESSAGE, TONE_FAILED_MESSAGE,
    ToneOutcome,
};
use selah_core::{
    ActiveView, CharacterField, CopyTarget, HistoricalEra, HistoryEntry, Language, ParameterSet,
    SceneCutField, StructuredResult, VisualStyle,
};
use selah_error::{SelahResult, SessionError, SessionErrorKind, ValidationError};
use selah_interface::{Clipboard, SelahDriver};
use selah_models::ScriptGenerator;
use selah_storage::HistoryStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// One user session: parameters, result, history and lifecycle.
///
/// Network operations come in three steps so in-flight work never borrows
/// the controller:
///
/// 1. `begin_*` checks the guards, transitions, and returns a pending request
/// 2. the pending request's `run()` performs the call
/// 3. `complete_*` applies the outcome to whatever the session looks like now
///
/// [`submit`](Self::submit) and [`recommend_tone`](Self::recommend_tone)
/// chain the three for callers that simply wait. An outcome that lands after
/// a reset or a newer request is still applied.
#[derive(Debug)]
pub struct SessionController<D> {
    generator: Arc<ScriptGenerator<D>>,
    params: ParameterSet,
    results: ResultStore,
    history: HistoryStore,
    state: SessionState,
    recommending_tone: bool,
    tone_ticket: u64,
    inline_error: Option<String>,
    active_view: ActiveView,
}

impl<D: SelahDriver> SessionController<D> {
    /// Fresh session with default parameters over an existing history.
    pub fn new(generator: Arc<ScriptGenerator<D>>, history: HistoryStore) -> Self {
        Self {
            generator,
            params: ParameterSet::default(),
            results: ResultStore::empty(),
            history,
            state: SessionState::Idle,
            recommending_tone: false,
            tone_ticket: 0,
            inline_error: None,
            active_view: ActiveView::default(),
        }
    }

    /// Lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Parameters being edited.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The current result, if any.
    pub fn result(&self) -> Option<&StructuredResult> {
        self.results.current()
    }

    /// The result store.
    pub fn results(&self) -> &ResultStore {
        &self.results
    }

    /// The history log.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Whether a tone request is in flight.
    pub fn is_recommending_tone(&self) -> bool {
        self.recommending_tone
    }

    /// Message to show next to the inputs, if any.
    pub fn inline_error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    /// Which result view is shown.
    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    /// Switch the result view.
    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Replace the whole parameter set.
    pub fn set_params(&mut self, params: ParameterSet) {
        self.params = params;
    }

    /// Set the source text.
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.params = std::mem::take(&mut self.params).with_source_text(text.into());
    }

    /// Set the output language.
    pub fn set_language(&mut self, language: Language) {
        self.params = std::mem::take(&mut self.params).with_language(language);
    }

    /// Set the total duration hint; blank clears it.
    pub fn set_total_duration(&mut self, seconds: impl Into<String>) {
        self.params = std::mem::take(&mut self.params).with_total_duration(non_blank(seconds));
    }

    /// Set the average cut duration hint; blank clears it.
    pub fn set_cut_duration(&mut self, seconds: impl Into<String>) {
        self.params = std::mem::take(&mut self.params).with_cut_duration(non_blank(seconds));
    }

    /// Set the visual style.
    pub fn set_style(&mut self, style: VisualStyle) {
        self.params = std::mem::take(&mut self.params).with_style(style);
    }

    /// Set the historical era.
    pub fn set_era(&mut self, era: HistoricalEra) {
        self.params = std::mem::take(&mut self.params).with_era(era);
    }

    /// Set the cultural context; blank clears it.
    pub fn set_cultural_context(&mut self, context: impl Into<String>) {
        self.params = std::mem::take(&mut self.params).with_cultural_context(non_blank(context));
    }

    /// Set the color tone; blank clears it.
    pub fn set_color_tone(&mut self, tone: impl Into<String>) {
        self.params = std::mem::take(&mut self.params).with_color_tone(non_blank(tone));
    }

    /// Start a script request.
    ///
    /// Entering `Generating` clears the inline error and discards the
    /// current result.
    ///
    /// # Errors
    ///
    /// - `GenerationInFlight` while another request is running
    /// - `ValidationError` when the source text is blank; the inline message
    ///   is set and nothing else changes
    #[instrument(skip(self), fields(state = self.state.label()))]
    pub fn begin_submit(&mut self) -> SelahResult<PendingGeneration<D>> {
        if self.state.is_generating() {
            return Err(SessionError::new(SessionErrorKind::GenerationInFlight).into());
        }
        if !self.params.has_source_text() {
            self.inline_error = Some(EMPTY_SOURCE_MESSAGE.to_string());
            return Err(ValidationError::new(EMPTY_SOURCE_MESSAGE).into());
        }

        self.state = SessionState::Generating;
        self.inline_error = None;
        self.results = ResultStore::empty();
        debug!("Generation started");

        Ok(PendingGeneration::new(
            Arc::clone(&self.generator),
            self.params.clone(),
        ))
    }

    /// Apply a finished script request.
    ///
    /// Success stores the result, resets the view and records a history
    /// entry built from the parameters captured at submission. Failure moves
    /// to `Failed` and leaves history alone.
    #[instrument(skip_all, fields(ok = outcome.result.is_ok()))]
    pub async fn complete_generation(&mut self, outcome: GenerationOutcome) {
        match outcome.result {
            Ok(result) => {
                self.results = ResultStore::new(result.clone());
                self.active_view = ActiveView::FullPrompt;
                self.state = SessionState::Ready;
                self.history
                    .append(HistoryEntry::new(outcome.params, result))
                    .await;
                info!(history = self.history.len(), "Generation succeeded");
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                self.state = SessionState::Failed {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }

    /// Submit and wait for the outcome.
    ///
    /// # Errors
    ///
    /// Same rejections as [`begin_submit`](Self::begin_submit). A failed
    /// request is not an error here; it shows up as [`SessionState::Failed`].
    pub async fn submit(&mut self) -> SelahResult<()> {
        let pending = self.begin_submit()?;
        let outcome = pending.run().await;
        self.complete_generation(outcome).await;
        Ok(())
    }

    /// Start a color tone request.
    ///
    /// # Errors
    ///
    /// - `ToneInFlight` while another tone request is running
    /// - `ValidationError` when the source text is blank
    #[instrument(skip(self))]
    pub fn begin_tone_recommendation(&mut self) -> SelahResult<PendingTone<D>> {
        if self.recommending_tone {
            return Err(SessionError::new(SessionErrorKind::ToneInFlight).into());
        }
        if !self.params.has_source_text() {
            self.inline_error = Some(TONE_EMPTY_SOURCE_MESSAGE.to_string());
            return Err(ValidationError::new(TONE_EMPTY_SOURCE_MESSAGE).into());
        }

        self.recommending_tone = true;
        self.tone_ticket += 1;
        self.inline_error = None;

        Ok(PendingTone::new(
            Arc::clone(&self.generator),
            self.params.source_text().to_string(),
            self.tone_ticket,
        ))
    }

    /// Apply a finished tone request.
    ///
    /// Only the color tone changes on success; failure sets the inline
    /// error. The lifecycle state is never touched.
    ///
    /// A stale outcome still applies its tone, but only the latest request
    /// releases the in-flight flag.
    #[instrument(skip_all, fields(ok = outcome.result.is_ok(), ticket = outcome.ticket))]
    pub fn complete_tone_recommendation(&mut self, outcome: ToneOutcome) {
        if outcome.ticket == self.tone_ticket {
            self.recommending_tone = false;
        } else {
            debug!(latest = self.tone_ticket, "Stale tone outcome");
        }
        match outcome.result {
            Ok(tone) => {
                debug!(tone = %tone, "Color tone recommended");
                self.set_color_tone(tone);
            }
            Err(e) => {
                warn!(error = %e, "Color tone recommendation failed");
                self.inline_error = Some(TONE_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Request a tone and wait for the outcome.
    ///
    /// # Errors
    ///
    /// Same rejections as
    /// [`begin_tone_recommendation`](Self::begin_tone_recommendation).
    pub async fn recommend_tone(&mut self) -> SelahResult<()> {
        let pending = self.begin_tone_recommendation()?;
        let outcome = pending.run().await;
        self.complete_tone_recommendation(outcome);
        Ok(())
    }

    /// Replace the master prompt of the current result.
    pub fn set_full_prompt(&mut self, text: impl Into<String>) {
        self.results = self.results.set_full_prompt(text);
    }

    /// Edit one field of a character.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when no such character exists.
    pub fn set_character_field(
        &mut self,
        index: usize,
        field: CharacterField,
        value: impl Into<String>,
    ) -> SelahResult<()> {
        self.results = self.results.set_character_field(index, field, value)?;
        Ok(())
    }

    /// Edit one editable field of a scene cut.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when no such scene cut exists.
    pub fn set_scene_cut_field(
        &mut self,
        index: usize,
        field: SceneCutField,
        value: impl Into<String>,
    ) -> SelahResult<()> {
        self.results = self.results.set_scene_cut_field(index, field, value)?;
        Ok(())
    }

    /// Copy part of the current result to `clipboard`.
    ///
    /// Returns `false` without touching the clipboard when there is no
    /// result.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a missing element, or the clipboard's error.
    pub fn copy(&self, target: CopyTarget, clipboard: &dyn Clipboard) -> SelahResult<bool> {
        match self.results.copy_text(target)? {
            Some(text) => {
                clipboard.copy_text(&text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restore a history entry into the session.
    ///
    /// The session becomes `Ready`, except while a generation is in flight:
    /// the entry is still restored but the state stays `Generating`, so a
    /// second submit is rejected until the outcome lands.
    ///
    /// Returns `false` and changes nothing for an unknown id.
    #[instrument(skip(self))]
    pub fn load_history_entry(&mut self, id: &str) -> bool {
        let Some(entry) = self.history.get(id) else {
            debug!("No history entry with this id");
            return false;
        };

        self.params = entry.inputs().clone();
        self.results = ResultStore::new(entry.generated_result().clone());
        self.active_view = ActiveView::FullPrompt;
        self.inline_error = None;
        if !self.state.is_generating() {
            self.state = SessionState::Ready;
        }
        true
    }

    /// Delete one history entry. The live result is unaffected.
    pub async fn delete_history_entry(&mut self, id: &str) -> bool {
        self.history.remove(id).await
    }

    /// Delete all history entries. The live result is unaffected.
    pub async fn clear_history(&mut self) {
        self.history.clear().await;
    }

    /// Back to defaults. History is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.params = ParameterSet::default();
        self.results = ResultStore::empty();
        self.inline_error = None;
        self.active_view = ActiveView::default();
        self.recommending_tone = false;
        self.state = SessionState::Idle;
    }
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|v| !v.trim().is_empty())
}
