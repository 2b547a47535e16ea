//! Filesystem-backed history slot.

use crate::HistorySlot;
use selah_error::{SelahResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// History slot stored as a single JSON file.
///
/// The parent directory is created on first write. Writes go to a sibling
/// temp file that is then renamed over the target, so a crash never leaves
/// a half-written log behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemSlot {
    path: PathBuf,
}

impl FileSystemSlot {
    /// Slot backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl HistorySlot for FileSystemSlot {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn read(&self) -> SelahResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "Read history file");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history file yet");
                Ok(None)
            }
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, contents), fields(path = %self.path.display(), bytes = contents.len()))]
    async fn write(&self, contents: &str) -> SelahResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Wrote history file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
