//! Storage slot trait definition.

use selah_error::SelahResult;

/// One named location holding the serialized history.
///
/// Implementations move opaque text in and out; encoding is the caller's
/// concern.
#[async_trait::async_trait]
pub trait HistorySlot: Send + Sync {
    /// Read the stored text.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    async fn read(&self) -> SelahResult<Option<String>>;

    /// Replace the stored text.
    async fn write(&self, contents: &str) -> SelahResult<()>;

    /// Human-readable location for logs.
    fn location(&self) -> String;
}
