//! The user-chosen generation parameters.

use crate::{HistoricalEra, Language, VisualStyle};
use serde::{Deserialize, Serialize};

/// Snapshot of every parameter that shapes one generation.
///
/// Optional fields are `None` when the user left them blank. A value that is
/// empty after trimming counts as absent, so the accessors only ever return
/// meaningful text. Stored values keep their original spelling and are
/// embedded verbatim.
///
/// The serialized field names match the persisted history format
/// (`verse`, `videoLength`, `cutLength`, `country`, `colorTone`, ...), where
/// an absent value is written as an empty string.
///
/// # Examples
///
/// ```
/// use selah_core::{Language, ParameterSet};
///
/// let params = ParameterSet::builder()
///     .source_text("John 3:16")
///     .language(Language::English)
///     .color_tone("   ")
///     .build()
///     .unwrap();
///
/// assert!(params.has_source_text());
/// assert_eq!(params.color_tone(), None);
///
/// let params = params.with_color_tone("Sepia-toned nostalgia".to_string());
/// assert_eq!(params.color_tone(), Some("Sepia-toned nostalgia"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_setters::Setters,
)]
#[builder(default, setter(into))]
#[setters(prefix = "with_", into)]
pub struct ParameterSet {
    /// Scripture reference or passage
    #[serde(rename = "verse")]
    source_text: String,
    /// Output language
    language: Language,
    /// Total video duration hint in seconds
    #[serde(rename = "videoLength", default, with = "empty_as_none")]
    #[builder(setter(into, strip_option))]
    total_duration: Option<String>,
    /// Average cut duration hint in seconds
    #[serde(rename = "cutLength", default, with = "empty_as_none")]
    #[builder(setter(into, strip_option))]
    cut_duration: Option<String>,
    /// Visual style
    style: VisualStyle,
    /// Historical era
    era: HistoricalEra,
    /// Cultural or national backdrop
    #[serde(rename = "country", default, with = "empty_as_none")]
    #[builder(setter(into, strip_option))]
    cultural_context: Option<String>,
    /// Color grading and artistic reference
    #[serde(rename = "colorTone", default, with = "empty_as_none")]
    #[builder(setter(into, strip_option))]
    color_tone: Option<String>,
}

impl ParameterSet {
    /// Creates a new parameter set builder.
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    /// The raw source text as entered.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Whether the source text is non-empty after trimming.
    pub fn has_source_text(&self) -> bool {
        !self.source_text.trim().is_empty()
    }

    /// Output language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Visual style.
    pub fn style(&self) -> VisualStyle {
        self.style
    }

    /// Historical era.
    pub fn era(&self) -> HistoricalEra {
        self.era
    }

    /// Total duration hint, if specified.
    pub fn total_duration(&self) -> Option<&str> {
        specified(&self.total_duration)
    }

    /// Average cut duration hint, if specified.
    pub fn cut_duration(&self) -> Option<&str> {
        specified(&self.cut_duration)
    }

    /// Cultural context, if specified.
    pub fn cultural_context(&self) -> Option<&str> {
        specified(&self.cultural_context)
    }

    /// Color tone, if specified.
    pub fn color_tone(&self) -> Option<&str> {
        specified(&self.color_tone)
    }
}

fn specified(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}
