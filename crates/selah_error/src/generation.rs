//! Errors raised while generating a script or a color tone.

/// Generation failure conditions.
///
/// Every way a call to the generation service can go wrong collapses into
/// this one enum so callers only ever handle a single error type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The service answered without any text payload
    #[display("No text returned from the generation service")]
    EmptyResponse,
    /// The text payload is not valid JSON
    #[display("Malformed payload: {}", _0)]
    MalformedPayload(String),
    /// The JSON payload does not have the expected shape
    #[display("Schema violation: {}", _0)]
    SchemaViolation(String),
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to build the HTTP client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the body could not be read
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// Service returned a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
}

impl GenerationErrorKind {
    /// Short stable label used for metrics and logs.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationErrorKind::EmptyResponse => "empty_response",
            GenerationErrorKind::MalformedPayload(_) => "malformed_payload",
            GenerationErrorKind::SchemaViolation(_) => "schema_violation",
            GenerationErrorKind::MissingApiKey => "missing_api_key",
            GenerationErrorKind::ClientCreation(_) => "client_creation",
            GenerationErrorKind::ApiRequest(_) => "api_request",
            GenerationErrorKind::HttpError { .. } => "http",
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use selah_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("No text returned"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for generation calls.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
