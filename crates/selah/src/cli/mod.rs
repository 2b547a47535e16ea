//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the selah binary.

mod commands;
mod generate;
mod history;
mod options;
mod session;

pub use commands::{Cli, Commands};
pub use generate::{recommend_tone, run_generate};
pub use history::handle_history_command;
pub use options::list_options;
pub use session::run_session;

use selah::{
    FileSystemSlot, GeminiClient, HistorySlot, HistoryStore, MemorySlot, ScriptGenerator,
    SelahConfig, SelahResult, SessionController,
};
use std::sync::Arc;
use tracing::debug;

/// Open the history log, on disk unless `ephemeral` is set.
pub async fn open_history(config: &SelahConfig, ephemeral: bool) -> HistoryStore {
    let slot: Arc<dyn HistorySlot> = if ephemeral {
        Arc::new(MemorySlot::new())
    } else {
        Arc::new(FileSystemSlot::new(config.history_path()))
    };
    debug!(location = %slot.location(), "Opening history");
    HistoryStore::load(slot).await
}

/// Build a session backed by the Gemini REST API.
pub async fn open_session(
    config: &SelahConfig,
    ephemeral: bool,
) -> SelahResult<SessionController<GeminiClient>> {
    let client = GeminiClient::new(config.gemini())?;
    let generator = ScriptGenerator::new(client, config.gemini());
    let history = open_history(config, ephemeral).await;
    Ok(SessionController::new(Arc::new(generator), history))
}
