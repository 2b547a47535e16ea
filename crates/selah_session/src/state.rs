//! Session lifecycle states and user-facing messages.

/// Shown inline when generation is requested without source text.
pub const EMPTY_SOURCE_MESSAGE: &str = "Please enter a Bible verse.";

/// Shown inline when a tone is requested without source text.
pub const TONE_EMPTY_SOURCE_MESSAGE: &str =
    "Please enter a Bible verse before requesting a color tone recommendation.";

/// Carried by [`SessionState::Failed`] after any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate the video prompt. Please try again later.";

/// Shown inline when a tone recommendation fails.
pub const TONE_FAILED_MESSAGE: &str = "Failed to recommend a color tone.";

/// Where a session is in its generation lifecycle.
///
/// `Ready` always coincides with a result being present.
#[derive(Debug, Clone, PartialEq, Eq, Default, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    /// Nothing generated yet, or reset
    #[default]
    Idle,
    /// A script request is in flight
    Generating,
    /// A result is available
    Ready,
    /// The last script request failed
    Failed {
        /// User-facing failure message
        message: String,
    },
}

impl SessionState {
    /// Short label for logs and status lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use selah_session::SessionState;
    ///
    /// assert_eq!(SessionState::Generating.label(), "generating");
    /// assert_eq!(SessionState::Failed { message: String::new() }.label(), "failed");
    /// ```
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Whether a script request is in flight.
    pub fn is_generating(&self) -> bool {
        matches!(self, SessionState::Generating)
    }
}
