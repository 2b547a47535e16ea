//! Core data types for the Selah video script generator.
//!
//! This crate provides the data model shared by every other Selah crate:
//! the generation parameters, the structured script returned by the model,
//! history entries, and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod history;
mod options;
mod params;
mod request;
mod script;
mod view;

pub use config::{GeminiConfig, HistoryConfig, SelahConfig};
pub use history::HistoryEntry;
pub use options::{HistoricalEra, Language, VisualStyle};
pub use params::{ParameterSet, ParameterSetBuilder, ParameterSetBuilderError};
pub use request::{GenerateRequest, GenerateResponse};
pub use script::{
    Character, CharacterField, CopyTarget, SceneCut, SceneCutField, StructuredResult,
};
pub use view::ActiveView;
