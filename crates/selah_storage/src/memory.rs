//! In-process history slot.

use crate::HistorySlot;
use selah_error::SelahResult;
use std::sync::{Arc, Mutex};

/// History slot held in memory.
///
/// Clones share the same contents, so a test can keep a handle and inspect
/// what the store wrote. Used for `--ephemeral` runs as well.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Current contents.
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl HistorySlot for MemorySlot {
    async fn read(&self) -> SelahResult<Option<String>> {
        Ok(self.contents())
    }

    async fn write(&self, contents: &str) -> SelahResult<()> {
        *self.lock() = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
