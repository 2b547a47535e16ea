//! Error types for the Selah library.
//!
//! This crate provides the foundation error types used throughout the Selah workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use selah_error::{SelahResult, ValidationError};
//!
//! fn check_verse(verse: &str) -> SelahResult<()> {
//!     if verse.trim().is_empty() {
//!         Err(ValidationError::new("Please enter a Bible verse."))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_verse("   ").is_err());
//! assert!(check_verse("John 3:16").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clipboard;
mod config;
mod error;
mod generation;
mod json;
mod session;
mod storage;
mod validation;

pub use clipboard::ClipboardError;
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{SelahError, SelahErrorKind, SelahResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
