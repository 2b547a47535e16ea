//! Top-level error wrapper types.

use crate::{
    ClipboardError, ConfigError, GenerationError, JsonError, SessionError, StorageError,
    ValidationError,
};

/// Union of every error condition the Selah crates can report.
///
/// # Examples
///
/// ```
/// use selah_error::{SelahError, ValidationError};
///
/// let err: SelahError = ValidationError::new("Please enter a Bible verse.").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SelahErrorKind {
    /// Failure talking to or interpreting the generation service
    #[from(GenerationError)]
    Generation(GenerationError),
    /// User input rejected before any work started
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Session operation rejected by the state machine
    #[from(SessionError)]
    Session(SessionError),
    /// History persistence failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Copy target could not be written
    #[from(ClipboardError)]
    Clipboard(ClipboardError),
}

/// Selah error with kind discrimination.
///
/// # Examples
///
/// ```
/// use selah_error::{ConfigError, ConfigErrorKind, SelahErrorKind, SelahResult};
///
/// fn might_fail() -> SelahResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Load("selah.toml".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), SelahErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Selah Error: {}", _0)]
pub struct SelahError(Box<SelahErrorKind>);

impl SelahError {
    /// Create a new error from a kind.
    pub fn new(kind: SelahErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SelahErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> SelahErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to SelahErrorKind
impl<T> From<T> for SelahError
where
    T: Into<SelahErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Selah operations.
pub type SelahResult<T> = std::result::Result<T, SelahError>;
