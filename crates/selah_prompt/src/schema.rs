//! Response schema in the generation service's dialect.

use serde_json::{Value, json};

/// Fields every character object must carry.
const CHARACTER_FIELDS: [&str; 2] = ["name", "description"];

/// Fields every scene cut object must carry, in declaration order.
const SCENE_CUT_FIELDS: [&str; 6] = [
    "cutNumber",
    "description",
    "narration",
    "backgroundMusic",
    "soundEffects",
    "dynamicElements",
];

/// Schema of the structured script.
///
/// An object with required `fullPrompt`, `characters` and `sceneCuts`; every
/// leaf is a string.
///
/// # Examples
///
/// ```
/// let schema = selah_prompt::output_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["required"][2], "sceneCuts");
/// ```
pub fn output_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "fullPrompt": { "type": "STRING" },
            "characters": {
                "type": "ARRAY",
                "items": string_object(&CHARACTER_FIELDS),
            },
            "sceneCuts": {
                "type": "ARRAY",
                "items": string_object(&SCENE_CUT_FIELDS),
            },
        },
        "required": ["fullPrompt", "characters", "sceneCuts"],
    })
}

fn string_object(fields: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|name| (name.to_string(), json!({ "type": "STRING" })))
        .collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields,
    })
}
