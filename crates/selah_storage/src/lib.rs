//! Persistent generation history for Selah.
//!
//! The history is a capped, most-recent-first log of [`HistoryEntry`]
//! values kept in a single slot. The whole log is rewritten on every
//! mutation and read once at start.
//!
//! # Features
//!
//! - **Pluggable slots**: [`HistorySlot`] abstracts where the log lives
//! - **Atomic writes**: [`FileSystemSlot`] writes via temp file + rename
//! - **Never fatal**: read and write failures are logged, not returned
//!
//! # Example
//!
//! ```rust
//! use selah_core::{HistoryEntry, ParameterSet, StructuredResult};
//! use selah_storage::{HistoryStore, MemorySlot};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut history = HistoryStore::load(Arc::new(MemorySlot::new())).await;
//!
//! let params = ParameterSet::builder().source_text("Psalm 23").build()?;
//! history.append(HistoryEntry::new(params, StructuredResult::default())).await;
//!
//! assert_eq!(history.len(), 1);
//! assert_eq!(history.list()[0].verse(), "Psalm 23");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod history;
mod memory;
mod slot;

pub use filesystem::FileSystemSlot;
pub use history::{HistoryStore, MAX_HISTORY_ENTRIES, decode_history, encode_history};
pub use memory::MemorySlot;
pub use slot::HistorySlot;
