// Session controller scenarios using MockDriver.

mod test_utils;

use selah_core::{
    ActiveView, CopyTarget, Language, ParameterSet, SceneCutField, StructuredResult, VisualStyle,
};
use selah_error::{GenerationErrorKind, SelahErrorKind, SelahResult, SessionErrorKind};
use selah_interface::Clipboard;
use selah_session::{
    EMPTY_SOURCE_MESSAGE, GENERATION_FAILED_MESSAGE, GenerationOutcome, SessionState,
    TONE_EMPTY_SOURCE_MESSAGE, TONE_FAILED_MESSAGE,
};
use selah_storage::{HistoryStore, MemorySlot};
use std::sync::Mutex;
use test_utils::{MockDriver, MockResponse, session_with, session_with_slot, two_cut_payload};

#[derive(Default)]
struct RecordingClipboard {
    copies: Mutex<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn copy_text(&self, text: &str) -> SelahResult<()> {
        self.copies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn john_3_16_english_scenario() -> anyhow::Result<()> {
    let driver = MockDriver::new_text(two_cut_payload());
    let mut session = session_with(driver.clone()).await;
    session.set_source_text("John 3:16");
    session.set_language(Language::English);

    let pending = session.begin_submit()?;
    let prompt = pending.instruction().text().clone();
    assert!(prompt.contains("All generated text MUST be in English."));
    assert!(!prompt.contains("Timing and Pacing"));
    assert_eq!(session.state(), &SessionState::Generating);

    let outcome = pending.run().await;
    session.complete_generation(outcome).await;

    assert_eq!(session.state(), &SessionState::Ready);
    let result = session.result().unwrap();
    assert_eq!(result.characters.len(), 1);
    assert_eq!(result.scene_cuts.len(), 2);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().list()[0].verse(), "John 3:16");
    assert_eq!(driver.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn blank_source_is_rejected_without_network() {
    let driver = MockDriver::new_text(two_cut_payload());
    let mut session = session_with(driver.clone()).await;
    session.set_source_text("   ");

    let err = session.submit().await.unwrap_err();

    assert!(matches!(err.kind(), SelahErrorKind::Validation(_)));
    assert_eq!(session.state(), &SessionState::Idle);
    assert_eq!(session.inline_error(), Some(EMPTY_SOURCE_MESSAGE));
    assert!(session.history().is_empty());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn unparseable_payload_fails_without_history() -> anyhow::Result<()> {
    let driver = MockDriver::new_text("I cannot help with that.");
    let mut session = session_with(driver).await;
    session.set_source_text("Genesis 1:1");

    session.submit().await?;

    assert_eq!(
        session.state(),
        &SessionState::Failed {
            message: GENERATION_FAILED_MESSAGE.to_string()
        }
    );
    assert!(session.result().is_none());
    assert!(session.history().is_empty());
    Ok(())
}

#[tokio::test]
async fn second_submit_while_generating_is_rejected() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("Psalm 23");

    let pending = session.begin_submit()?;
    let err = session.begin_submit().unwrap_err();
    assert!(matches!(
        err.kind(),
        SelahErrorKind::Session(e) if e.kind == SessionErrorKind::GenerationInFlight
    ));

    session.complete_generation(pending.run().await).await;
    assert_eq!(session.state(), &SessionState::Ready);
    Ok(())
}

#[tokio::test]
async fn submitting_discards_previous_result_and_error() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.submit().await.unwrap_err();
    assert!(session.inline_error().is_some());

    session.set_source_text("Psalm 23");
    session.submit().await?;
    assert!(session.result().is_some());

    let _pending = session.begin_submit()?;
    assert!(session.result().is_none());
    assert!(session.inline_error().is_none());
    Ok(())
}

#[tokio::test]
async fn history_records_parameters_captured_at_submission() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.set_style(VisualStyle::EpicAnimation);

    let pending = session.begin_submit()?;
    session.set_source_text("Psalm 23");
    session.set_style(VisualStyle::FantasyArt);
    session.complete_generation(pending.run().await).await;

    let entry = &session.history().list()[0];
    assert_eq!(entry.verse(), "John 3:16");
    assert_eq!(entry.inputs().style(), VisualStyle::EpicAnimation);
    assert_eq!(session.params().source_text(), "Psalm 23");
    Ok(())
}

#[tokio::test]
async fn late_result_after_reset_is_still_applied() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");

    let pending = session.begin_submit()?;
    session.reset();
    assert_eq!(session.state(), &SessionState::Idle);

    session.complete_generation(pending.run().await).await;
    assert_eq!(session.state(), &SessionState::Ready);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.params(), &ParameterSet::default());
    Ok(())
}

#[tokio::test]
async fn success_resets_view_to_full_prompt() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.set_active_view(ActiveView::SceneCuts);

    session.submit().await?;
    assert_eq!(session.active_view(), ActiveView::FullPrompt);
    Ok(())
}

#[tokio::test]
async fn edits_do_not_touch_history() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.submit().await?;

    session.set_scene_cut_field(0, SceneCutField::Narration, "#whispering Edited")?;
    session.set_full_prompt("Edited prompt");

    let live = session.result().unwrap();
    assert_eq!(live.scene_cuts[0].narration, "#whispering Edited");
    assert_eq!(live.scene_cuts[0].description, "Wide shot of the sleeping city.");
    assert_eq!(live.scene_cuts[1].narration, "#whispering that he gave his only Son");

    let stored = session.history().list()[0].generated_result();
    assert_eq!(stored.scene_cuts[0].narration, "#solemn For God so loved the world");
    assert_ne!(stored.full_prompt, "Edited prompt");
    Ok(())
}

#[tokio::test]
async fn out_of_range_edit_is_reported() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.submit().await?;
    let before = session.result().cloned();

    let err = session
        .set_scene_cut_field(9, SceneCutField::Narration, "x")
        .unwrap_err();
    assert!(matches!(err.kind(), SelahErrorKind::Session(_)));
    assert_eq!(session.result().cloned(), before);
    Ok(())
}

#[tokio::test]
async fn load_history_entry_restores_params_and_result() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.set_color_tone("Sepia");
    session.submit().await?;
    let id = session.history().list()[0].id().clone();

    session.set_scene_cut_field(0, SceneCutField::Narration, "Edited")?;
    session.reset();
    session.set_active_view(ActiveView::SceneCuts);

    assert!(session.load_history_entry(&id));
    assert_eq!(session.state(), &SessionState::Ready);
    assert_eq!(session.params().source_text(), "John 3:16");
    assert_eq!(session.params().color_tone(), Some("Sepia"));
    assert_eq!(session.active_view(), ActiveView::FullPrompt);
    assert_eq!(
        session.result().unwrap().scene_cuts[0].narration,
        "#solemn For God so loved the world"
    );
    Ok(())
}

#[tokio::test]
async fn load_unknown_entry_changes_nothing() {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("Psalm 1");

    assert!(!session.load_history_entry("missing"));
    assert_eq!(session.state(), &SessionState::Idle);
    assert_eq!(session.params().source_text(), "Psalm 1");
}

#[tokio::test]
async fn reset_keeps_history() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.set_language(Language::French);
    session.submit().await?;

    session.reset();

    assert_eq!(session.state(), &SessionState::Idle);
    assert!(session.result().is_none());
    assert_eq!(session.params(), &ParameterSet::default());
    assert_eq!(session.history().len(), 1);
    Ok(())
}

#[tokio::test]
async fn deleting_history_never_touches_live_result() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.submit().await?;
    let id = session.history().list()[0].id().clone();

    assert!(session.delete_history_entry(&id).await);
    assert!(!session.delete_history_entry(&id).await);
    session.clear_history().await;

    assert!(session.history().is_empty());
    assert_eq!(session.state(), &SessionState::Ready);
    assert!(session.result().is_some());
    Ok(())
}

#[tokio::test]
async fn history_persists_across_sessions() -> anyhow::Result<()> {
    let slot = MemorySlot::new();
    {
        let mut session =
            session_with_slot(MockDriver::new_text(two_cut_payload()), slot.clone()).await;
        session.set_source_text("John 3:16");
        session.submit().await?;
    }

    let history = HistoryStore::load(std::sync::Arc::new(slot)).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history.list()[0].verse(), "John 3:16");
    Ok(())
}

#[tokio::test]
async fn tone_success_replaces_only_color_tone() -> anyhow::Result<()> {
    let driver = MockDriver::new_text("  Monochromatic noir  ");
    let mut session = session_with(driver).await;
    session.set_source_text("Psalm 23");
    session.set_cultural_context("Israel");

    let pending = session.begin_tone_recommendation()?;
    assert!(session.is_recommending_tone());
    assert_eq!(pending.source_text(), "Psalm 23");
    session.complete_tone_recommendation(pending.run().await);

    assert!(!session.is_recommending_tone());
    assert_eq!(session.params().color_tone(), Some("Monochromatic noir"));
    assert_eq!(session.params().cultural_context(), Some("Israel"));
    assert_eq!(session.state(), &SessionState::Idle);
    Ok(())
}

#[tokio::test]
async fn tone_guards() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text("Noir")).await;

    let err = session.recommend_tone().await.unwrap_err();
    assert!(matches!(err.kind(), SelahErrorKind::Validation(_)));
    assert_eq!(session.inline_error(), Some(TONE_EMPTY_SOURCE_MESSAGE));

    session.set_source_text("Psalm 23");
    let _pending = session.begin_tone_recommendation()?;
    let err = session.begin_tone_recommendation().unwrap_err();
    assert!(matches!(
        err.kind(),
        SelahErrorKind::Session(e) if e.kind == SessionErrorKind::ToneInFlight
    ));
    Ok(())
}

#[tokio::test]
async fn tone_failure_sets_inline_error_only() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Text(two_cut_payload()),
        MockResponse::Error(GenerationErrorKind::ApiRequest("offline".to_string())),
    ]);
    let mut session = session_with(driver).await;
    session.set_source_text("John 3:16");
    session.set_color_tone("Sepia");
    session.submit().await?;

    session.recommend_tone().await?;

    assert_eq!(session.inline_error(), Some(TONE_FAILED_MESSAGE));
    assert_eq!(session.params().color_tone(), Some("Sepia"));
    assert_eq!(session.state(), &SessionState::Ready);
    Ok(())
}

#[tokio::test]
async fn manual_outcome_can_be_applied() {
    let mut session = session_with(MockDriver::new_text("unused")).await;
    let params = ParameterSet::builder()
        .source_text("Ruth 1:16")
        .build()
        .unwrap();
    let result = StructuredResult {
        full_prompt: "Two women on a dusty road".to_string(),
        ..Default::default()
    };

    session
        .complete_generation(GenerationOutcome::new(params, Ok(result)))
        .await;

    assert_eq!(session.state(), &SessionState::Ready);
    assert_eq!(session.history().list()[0].verse(), "Ruth 1:16");
}

#[tokio::test]
async fn copy_uses_clipboard_only_with_result() -> anyhow::Result<()> {
    let clipboard = RecordingClipboard::default();
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;

    assert!(!session.copy(CopyTarget::FullPrompt, &clipboard)?);

    session.set_source_text("John 3:16");
    session.submit().await?;
    assert!(session.copy(CopyTarget::Character(0), &clipboard)?);
    assert!(session.copy(CopyTarget::SceneCut(1), &clipboard)?);
    assert!(session.copy(CopyTarget::SceneCut(2), &clipboard).is_err());

    let copies = clipboard.copies.lock().unwrap();
    assert_eq!(copies.len(), 2);
    assert_eq!(
        copies[0],
        "Nicodemus\n\nAn elderly Pharisee in a dark wool cloak."
    );
    assert!(copies[1].starts_with("CUT #2\n\nClose-up on weathered hands.\n\nDynamic Elements:\nRack focus"));
    Ok(())
}

#[tokio::test]
async fn setters_treat_blank_as_absent() {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_total_duration("60");
    session.set_cut_duration("5");
    session.set_style(VisualStyle::PainterlyStyle);
    session.set_cultural_context("Korea");
    assert_eq!(session.params().total_duration(), Some("60"));
    assert_eq!(session.params().cut_duration(), Some("5"));
    assert_eq!(session.params().style(), VisualStyle::PainterlyStyle);
    assert_eq!(session.params().cultural_context(), Some("Korea"));

    session.set_total_duration("  ");
    session.set_cultural_context("");
    assert_eq!(session.params().total_duration(), None);
    assert_eq!(session.params().cultural_context(), None);
    assert_eq!(session.params().cut_duration(), Some("5"));
}

#[tokio::test]
async fn view_switch_is_independent_of_result() {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_active_view(ActiveView::SceneCuts);
    assert_eq!(session.active_view(), ActiveView::SceneCuts);

    session.reset();
    assert_eq!(session.active_view(), ActiveView::FullPrompt);
}

#[tokio::test]
async fn loading_history_during_generation_keeps_submit_guard() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text(two_cut_payload())).await;
    session.set_source_text("John 3:16");
    session.submit().await?;
    let id = session.history().list()[0].id().clone();

    session.set_source_text("Psalm 23");
    let first = session.begin_submit()?;
    assert!(session.load_history_entry(&id));

    assert_eq!(session.state(), &SessionState::Generating);
    assert_eq!(session.params().source_text(), "John 3:16");
    assert!(session.result().is_some());

    let err = session.begin_submit().unwrap_err();
    assert!(matches!(
        err.kind(),
        SelahErrorKind::Session(e) if e.kind == SessionErrorKind::GenerationInFlight
    ));

    session.complete_generation(first.run().await).await;
    assert_eq!(session.state(), &SessionState::Ready);
    assert_eq!(session.history().list()[0].verse(), "Psalm 23");
    Ok(())
}

#[tokio::test]
async fn stale_tone_outcome_keeps_newer_request_in_flight() -> anyhow::Result<()> {
    let mut session = session_with(MockDriver::new_text("Warm amber")).await;
    session.set_source_text("Psalm 23");
    let stale = session.begin_tone_recommendation()?;

    session.reset();
    session.set_source_text("Ruth 1:16");
    let latest = session.begin_tone_recommendation()?;

    session.complete_tone_recommendation(stale.run().await);
    assert!(session.is_recommending_tone());
    let err = session.begin_tone_recommendation().unwrap_err();
    assert!(matches!(
        err.kind(),
        SelahErrorKind::Session(e) if e.kind == SessionErrorKind::ToneInFlight
    ));

    session.complete_tone_recommendation(latest.run().await);
    assert!(!session.is_recommending_tone());
    assert_eq!(session.params().color_tone(), Some("Warm amber"));
    Ok(())
}
