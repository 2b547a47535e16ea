//! Test utilities for session tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

use selah_models::ScriptGenerator;
use selah_session::SessionController;
use selah_storage::{HistoryStore, MemorySlot};
use std::sync::Arc;

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

/// Session over `driver` with an empty in-memory history.
#[allow(dead_code)]
pub async fn session_with(driver: MockDriver) -> SessionController<MockDriver> {
    session_with_slot(driver, MemorySlot::new()).await
}

/// Session over `driver` persisting to `slot`.
#[allow(dead_code)]
pub async fn session_with_slot(
    driver: MockDriver,
    slot: MemorySlot,
) -> SessionController<MockDriver> {
    let generator = ScriptGenerator::with_models(driver, "script-model", "tone-model");
    let history = HistoryStore::load(Arc::new(slot)).await;
    SessionController::new(Arc::new(generator), history)
}
