//! Selah - scripture to cinematic video script
//!
//! Selah turns a scripture reference plus a handful of creative parameters
//! into a structured script for text-to-video models: a master prompt, a
//! cast list and a scene-by-scene breakdown with narration, music, sound
//! and camera work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use selah::{
//!     GeminiClient, HistoryStore, Language, MemorySlot, ScriptGenerator, SelahConfig,
//!     SessionController, SessionState,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SelahConfig::load()?;
//!     let generator = ScriptGenerator::new(GeminiClient::new(config.gemini())?, config.gemini());
//!     let history = HistoryStore::load(Arc::new(MemorySlot::new())).await;
//!
//!     let mut session = SessionController::new(Arc::new(generator), history);
//!     session.set_source_text("John 3:16");
//!     session.set_language(Language::English);
//!     session.submit().await?;
//!
//!     if let (SessionState::Ready, Some(result)) = (session.state(), session.result()) {
//!         println!("{}", result.full_prompt);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `selah_error` - Error types
//! - `selah_core` - Parameters, results, history entries, configuration
//! - `selah_interface` - `SelahDriver` and `Clipboard` traits
//! - `selah_prompt` - Instruction compiler
//! - `selah_models` - Gemini backend and reply validation
//! - `selah_storage` - Persistent history
//! - `selah_session` - Session state machine
//!
//! This crate re-exports everything and adds the terminal front end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clipboard;
mod render;
pub mod repl;

pub use clipboard::StdoutClipboard;
pub use render::{render_history, render_params, render_result};

pub use selah_core::*;
pub use selah_error::*;
pub use selah_interface::*;
pub use selah_models::*;
pub use selah_prompt::*;
pub use selah_session::*;
pub use selah_storage::*;
