//! Instruction compiler for the Selah video script generator.
//!
//! Turns a [`ParameterSet`](selah_core::ParameterSet) into the text and
//! response schema sent to the generation service. Everything here is pure:
//! the same parameters always compile to byte-identical output.
//!
//! # Examples
//!
//! ```
//! use selah_core::{Language, ParameterSet};
//! use selah_prompt::compile;
//!
//! let params = ParameterSet::builder()
//!     .source_text("John 3:16")
//!     .language(Language::English)
//!     .build()
//!     .unwrap();
//!
//! let instruction = compile(&params);
//! assert!(instruction.text().contains("\"John 3:16\""));
//! assert!(!instruction.text().contains("Timing and Pacing"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compiler;
mod instruction;
mod schema;

pub use compiler::{compile, compile_tone_request};
pub use instruction::Instruction;
pub use schema::output_schema;
