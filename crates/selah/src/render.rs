//! Plain-text rendering for the terminal.
//!
//! Element numbers shown to the user are 1-based.

use chrono::{DateTime, Local};
use selah_core::{ActiveView, HistoryEntry, ParameterSet, StructuredResult};

const RULE: &str = "----------------------------------------";

/// Render a result in the given view.
///
/// The full-prompt view shows the master prompt and the characters; the
/// scene-cuts view shows every cut in its clipboard layout.
pub fn render_result(result: &StructuredResult, view: ActiveView) -> String {
    let mut out = String::new();
    match view {
        ActiveView::FullPrompt => {
            out.push_str("Full Prompt\n");
            out.push_str(RULE);
            out.push('\n');
            out.push_str(&result.full_prompt);
            out.push('\n');

            if !result.characters.is_empty() {
                out.push_str("\nCharacters\n");
                out.push_str(RULE);
                out.push('\n');
                for (i, character) in result.characters.iter().enumerate() {
                    out.push_str(&format!(
                        "{}. {}\n   {}\n",
                        i + 1,
                        character.name,
                        character.description
                    ));
                }
            }
        }
        ActiveView::SceneCuts => {
            if result.scene_cuts.is_empty() {
                out.push_str("No scene cuts.\n");
            }
            for (i, cut) in result.scene_cuts.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("[{}] {}\n", i + 1, RULE));
                out.push_str(&cut.copy_text());
                out.push('\n');
            }
        }
    }
    out
}

/// Render the history list, most recent first.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "History is empty.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let when = entry
            .created_at()
            .map(|at| {
                DateTime::<Local>::from(at)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_default();
        out.push_str(&format!("{}  {}  {}\n", entry.id(), when, entry.verse()));
    }
    out
}

/// Render the parameter set, one field per line.
pub fn render_params(params: &ParameterSet) -> String {
    let optional = |value: Option<&str>| value.unwrap_or("-").to_string();
    let rows = [
        ("Verse", params.source_text().to_string()),
        ("Language", params.language().label().to_string()),
        ("Total duration (s)", optional(params.total_duration())),
        ("Cut duration (s)", optional(params.cut_duration())),
        ("Visual style", params.style().label().to_string()),
        ("Historical era", params.era().label().to_string()),
        ("Cultural context", optional(params.cultural_context())),
        ("Color tone", optional(params.color_tone())),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:<20}{}\n", label, value))
        .collect()
}
