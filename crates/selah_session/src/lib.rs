//! Session state machine for the Selah video script generator.
//!
//! A [`SessionController`] owns everything one user session needs: the
//! parameter set being edited, the current result, the history log and the
//! generation lifecycle. There is no global state; two controllers never
//! share anything but the generator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod pending;
mod result;
mod state;

pub use controller::SessionController;
pub use pending::{GenerationOutcome, PendingGeneration, PendingTone, ToneOutcome};
pub use result::ResultStore;
pub use state::{
    EMPTY_SOURCE_MESSAGE, GENERATION_FAILED_MESSAGE, SessionState, TONE_EMPTY_SOURCE_MESSAGE,
    TONE_FAILED_MESSAGE,
};
