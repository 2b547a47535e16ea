//! Trait definitions for the Selah video script generator.
//!
//! These are the seams between the session logic and the outside world:
//! the generation backend and the system clipboard.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Clipboard, SelahDriver};
