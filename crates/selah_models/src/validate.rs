//! Reply validation and projection.
//!
//! Replies are parsed into a `serde_json::Value`, checked for the expected
//! top-level shape and projected field by field into a
//! [`StructuredResult`]. Only the first scene cut is inspected for
//! `dynamicElements`; later cuts are projected as they come.

use selah_core::{Character, SceneCut, StructuredResult};
use selah_error::{GenerationError, GenerationErrorKind, GenerationResult};
use serde_json::{Map, Value};

/// Parse and validate a script reply.
///
/// # Errors
///
/// - `MalformedPayload` if `text` is not JSON
/// - `SchemaViolation` if the top level is not an object with a non-empty
///   string `fullPrompt` and array `characters` and `sceneCuts`, or if the
///   first scene cut has no `dynamicElements` key
///
/// # Examples
///
/// ```
/// use selah_models::parse_script;
///
/// let script = parse_script(r#"{"fullPrompt": "Dawn", "characters": [], "sceneCuts": []}"#).unwrap();
/// assert_eq!(script.full_prompt, "Dawn");
/// assert!(parse_script("not json").is_err());
/// ```
pub fn parse_script(text: &str) -> GenerationResult<StructuredResult> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| GenerationError::new(GenerationErrorKind::MalformedPayload(e.to_string())))?;

    let root = value
        .as_object()
        .ok_or_else(|| violation("top-level value is not an object"))?;

    let full_prompt = match root.get("fullPrompt") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(violation("fullPrompt must be a non-empty string")),
    };
    let characters = root
        .get("characters")
        .and_then(Value::as_array)
        .ok_or_else(|| violation("characters must be an array"))?;
    let scene_cuts = root
        .get("sceneCuts")
        .and_then(Value::as_array)
        .ok_or_else(|| violation("sceneCuts must be an array"))?;

    if let Some(first) = scene_cuts.first() {
        if first.get("dynamicElements").is_none() {
            return Err(violation("first scene cut is missing dynamicElements"));
        }
    }

    Ok(StructuredResult {
        full_prompt,
        characters: characters.iter().map(project_character).collect(),
        scene_cuts: scene_cuts.iter().map(project_scene_cut).collect(),
    })
}

/// Trim a tone reply.
///
/// # Errors
///
/// Returns `EmptyResponse` when nothing but whitespace came back.
pub fn parse_tone(text: Option<&str>) -> GenerationResult<String> {
    let tone = text.map(str::trim).unwrap_or_default();
    if tone.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
    }
    Ok(tone.to_string())
}

#[track_caller]
fn violation(message: &str) -> GenerationError {
    GenerationError::new(GenerationErrorKind::SchemaViolation(message.to_string()))
}

fn project_character(value: &Value) -> Character {
    let Some(fields) = value.as_object() else {
        return Character::default();
    };
    Character {
        name: string_field(fields, "name"),
        description: string_field(fields, "description"),
    }
}

fn project_scene_cut(value: &Value) -> SceneCut {
    let Some(fields) = value.as_object() else {
        return SceneCut::default();
    };
    SceneCut {
        cut_number: string_field(fields, "cutNumber"),
        description: string_field(fields, "description"),
        narration: string_field(fields, "narration"),
        background_music: string_field(fields, "backgroundMusic"),
        sound_effects: string_field(fields, "soundEffects"),
        dynamic_elements: string_field(fields, "dynamicElements"),
    }
}

// Absent and null become "", other scalars keep their JSON spelling.
fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
