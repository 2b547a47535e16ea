//! Configuration error types.

/// What went wrong while assembling the layered configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or merged
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// The merged sources do not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Deserialize(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use selah_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Deserialize("missing field `gemini`".into()));
/// assert!(err.to_string().contains("missing field"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
