//! Capped generation history.

use crate::HistorySlot;
use selah_core::HistoryEntry;
use selah_error::{StorageError, StorageErrorKind};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Maximum number of entries kept; older entries are evicted.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Most-recent-first log of past generations.
///
/// The in-memory log is authoritative. Every mutation rewrites the slot;
/// a failed write is logged and the mutation still stands.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    slot: Arc<dyn HistorySlot>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .field("slot", &self.slot.location())
            .finish()
    }
}

impl HistoryStore {
    /// Read the log from `slot`.
    ///
    /// An absent, unreadable or corrupt log yields an empty history.
    #[instrument(skip(slot), fields(slot = %slot.location()))]
    pub async fn load(slot: Arc<dyn HistorySlot>) -> Self {
        let mut entries = match slot.read().await {
            Ok(Some(contents)) => match decode_history(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "History is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read history, starting empty");
                Vec::new()
            }
        };
        entries.truncate(MAX_HISTORY_ENTRIES);

        debug!(count = entries.len(), "Loaded history");
        Self { entries, slot }
    }

    /// Entries, most recent first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry with the given id.
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend `entry`, evicting the oldest beyond the cap.
    #[instrument(skip(self, entry), fields(id = %entry.id()))]
    pub async fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.persist().await;
    }

    /// Delete the entry with `id`.
    ///
    /// Returns whether an entry was removed. An unknown id changes nothing
    /// and writes nothing.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        if self.entries.len() == before {
            debug!("No history entry with this id");
            return false;
        }
        self.persist().await;
        true
    }

    /// Delete every entry.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) {
        self.entries.clear();
        self.persist().await;
    }

    async fn persist(&self) {
        let contents = match encode_history(&self.entries) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, "Failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.slot.write(&contents).await {
            warn!(error = %e, slot = %self.slot.location(), "Failed to persist history");
        }
    }
}

/// Parse a persisted history log.
///
/// # Errors
///
/// `Serialization` when the contents are not a JSON array of entries.
pub fn decode_history(contents: &str) -> Result<Vec<HistoryEntry>, StorageError> {
    serde_json::from_str(contents)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))
}

/// Encode entries in the persisted history format.
///
/// # Errors
///
/// `Serialization` when an entry cannot be encoded.
pub fn encode_history(entries: &[HistoryEntry]) -> Result<String, StorageError> {
    serde_json::to_string(entries)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))
}
