//! Session controller errors.

/// Operations the session state machine refuses to perform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// A script generation is already running
    #[display("A generation request is already in flight")]
    GenerationInFlight,
    /// A color tone recommendation is already running
    #[display("A color tone recommendation is already in flight")]
    ToneInFlight,
    /// Edit addressed an element that does not exist
    #[display("{} index {} out of range (len {})", collection, index, len)]
    IndexOutOfRange {
        /// Which sequence was addressed ("characters" or "sceneCuts")
        collection: &'static str,
        /// Requested index
        index: usize,
        /// Current length of the sequence
        len: usize,
    },
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use selah_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::IndexOutOfRange {
///     collection: "sceneCuts",
///     index: 4,
///     len: 2,
/// });
/// assert!(format!("{}", err).contains("sceneCuts index 4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The kind of error that occurred
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
