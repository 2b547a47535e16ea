//! Test utilities for Selah generation tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

/// A reply with one character and two scene cuts.
#[allow(dead_code)]
pub fn two_cut_payload() -> String {
    serde_json::json!({
        "fullPrompt": "A lone figure on a moonlit rooftop in first-century Jerusalem.",
        "characters": [
            { "name": "Nicodemus", "description": "An elderly Pharisee in a dark wool cloak." }
        ],
        "sceneCuts": [
            {
                "cutNumber": "CUT #1",
                "description": "Wide shot of the sleeping city.",
                "narration": "#solemn For God so loved the world",
                "backgroundMusic": "Low strings",
                "soundEffects": "Night wind",
                "dynamicElements": "Sweeping crane shot"
            },
            {
                "cutNumber": "CUT #2",
                "description": "Close-up on weathered hands.",
                "narration": "#whispering that he gave his only Son",
                "backgroundMusic": "Solo cello",
                "soundEffects": "Oil lamp flicker",
                "dynamicElements": "Rack focus"
            }
        ]
    })
    .to_string()
}
