//! Input validation errors.

/// User input was rejected before any work started.
///
/// The message is meant to be shown inline next to the offending input.
///
/// # Examples
///
/// ```
/// use selah_error::ValidationError;
///
/// let err = ValidationError::new("Please enter a Bible verse.");
/// assert_eq!(err.message, "Please enter a Bible verse.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// User-facing message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
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
