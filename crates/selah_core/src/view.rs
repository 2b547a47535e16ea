//! Which part of the result is currently displayed.

/// The two result views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ActiveView {
    /// Master prompt and characters
    #[default]
    #[strum(serialize = "full")]
    FullPrompt,
    /// Scene-by-scene breakdown
    #[strum(serialize = "cuts")]
    SceneCuts,
}
