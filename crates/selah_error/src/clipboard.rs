//! Clipboard error types.

/// Copied text could not be delivered.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Clipboard Error: {} at line {} in {}", message, line, file)]
pub struct ClipboardError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ClipboardError {
    /// Create a new ClipboardError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
