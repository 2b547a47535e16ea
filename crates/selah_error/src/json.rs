//! JSON output errors.

/// A value could not be written as JSON for output.
///
/// Model replies never produce this; they fail validation with a
/// `GenerationError` instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON output failed: {} ({}:{})", message, file, line)]
pub struct JsonError {
    /// Serializer message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Wrap a serializer message, recording the caller's location.
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
