use selah_error::GenerationErrorKind;
use selah_models::{parse_script, parse_tone};
use serde_json::json;

fn is_violation(text: &str) -> bool {
    matches!(
        parse_script(text).map_err(|e| e.kind),
        Err(GenerationErrorKind::SchemaViolation(_))
    )
}

#[test]
fn first_cut_without_dynamic_elements_is_rejected() {
    let payload = json!({
        "fullPrompt": "Dawn over Galilee",
        "characters": [],
        "sceneCuts": [{ "cutNumber": "CUT #1", "narration": "..." }]
    });
    assert!(is_violation(&payload.to_string()));
}

#[test]
fn first_cut_with_only_dynamic_elements_is_accepted() -> anyhow::Result<()> {
    let payload = json!({
        "fullPrompt": "Dawn over Galilee",
        "characters": [],
        "sceneCuts": [{ "dynamicElements": "Slow dolly-in" }]
    });
    let script = parse_script(&payload.to_string())?;

    let cut = &script.scene_cuts[0];
    assert_eq!(cut.dynamic_elements, "Slow dolly-in");
    assert_eq!(cut.cut_number, "");
    assert_eq!(cut.narration, "");
    Ok(())
}

#[test]
fn only_first_cut_is_checked() -> anyhow::Result<()> {
    let payload = json!({
        "fullPrompt": "Dawn over Galilee",
        "characters": [],
        "sceneCuts": [
            { "dynamicElements": "Crane shot" },
            { "cutNumber": "CUT #2" }
        ]
    });
    let script = parse_script(&payload.to_string())?;
    assert_eq!(script.scene_cuts[1].cut_number, "CUT #2");
    assert_eq!(script.scene_cuts[1].dynamic_elements, "");
    Ok(())
}

#[test]
fn null_dynamic_elements_counts_as_present() -> anyhow::Result<()> {
    let payload = json!({
        "fullPrompt": "Dawn",
        "characters": [],
        "sceneCuts": [{ "dynamicElements": null }]
    });
    let script = parse_script(&payload.to_string())?;
    assert_eq!(script.scene_cuts[0].dynamic_elements, "");
    Ok(())
}

#[test]
fn empty_scene_cuts_are_valid() -> anyhow::Result<()> {
    let script = parse_script(r#"{"fullPrompt": "Dawn", "characters": [], "sceneCuts": []}"#)?;
    assert!(script.scene_cuts.is_empty());
    Ok(())
}

#[test]
fn top_level_shape_is_enforced() {
    assert!(is_violation("[]"));
    assert!(is_violation(r#"{"characters": [], "sceneCuts": []}"#));
    assert!(is_violation(r#"{"fullPrompt": "", "characters": [], "sceneCuts": []}"#));
    assert!(is_violation(r#"{"fullPrompt": 7, "characters": [], "sceneCuts": []}"#));
    assert!(is_violation(r#"{"fullPrompt": "Dawn", "characters": {}, "sceneCuts": []}"#));
    assert!(is_violation(r#"{"fullPrompt": "Dawn", "characters": []}"#));
}

#[test]
fn non_string_scalars_keep_json_spelling() -> anyhow::Result<()> {
    let payload = json!({
        "fullPrompt": "Dawn",
        "characters": [{ "name": 12, "description": true }, "stray"],
        "sceneCuts": []
    });
    let script = parse_script(&payload.to_string())?;
    assert_eq!(script.characters[0].name, "12");
    assert_eq!(script.characters[0].description, "true");
    assert_eq!(script.characters[1].name, "");
    Ok(())
}

#[test]
fn malformed_json_is_distinguished() {
    let err = parse_script("{\"fullPrompt\": ").unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::MalformedPayload(_)));
}

#[test]
fn tone_parsing_trims() {
    assert_eq!(parse_tone(Some("  Noir  ")).unwrap(), "Noir");
    assert_eq!(
        parse_tone(None).unwrap_err().kind,
        GenerationErrorKind::EmptyResponse
    );
}
