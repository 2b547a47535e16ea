//! The structured video script returned by the generation service.

use selah_error::{SessionError, SessionErrorKind};
use serde::{Deserialize, Serialize};

/// A key figure appearing in the video.
///
/// Characters have no identity beyond their position in
/// [`StructuredResult::characters`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Appearance, clothing and demeanor
    pub description: String,
}

impl Character {
    /// Text block placed on the clipboard when copying this character.
    ///
    /// # Examples
    ///
    /// ```
    /// use selah_core::Character;
    ///
    /// let c = Character { name: "Nicodemus".into(), description: "A Pharisee".into() };
    /// assert_eq!(c.copy_text(), "Nicodemus\n\nA Pharisee");
    /// ```
    pub fn copy_text(&self) -> String {
        format!("{}\n\n{}", self.name, self.description)
    }
}

/// Editable text fields of a [`Character`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum CharacterField {
    /// [`Character::name`]
    Name,
    /// [`Character::description`]
    Description,
}

/// One shot in the video timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneCut {
    /// Sequence label such as "CUT #1"
    pub cut_number: String,
    /// Visual plan for the shot (read-only once generated)
    pub description: String,
    /// Voice-over script
    pub narration: String,
    /// Score suggestion
    pub background_music: String,
    /// Diegetic sounds
    pub sound_effects: String,
    /// Camera work and visual effects
    pub dynamic_elements: String,
}

impl SceneCut {
    /// Text block placed on the clipboard when copying this cut.
    ///
    /// Fields appear in a fixed order: cut number, description, dynamic
    /// elements, music, effects, narration.
    pub fn copy_text(&self) -> String {
        format!(
            "{}\n\n{}\n\nDynamic Elements:\n{}\n\nBackground Music:\n{}\n\nSound Effects:\n{}\n\nNarration:\n{}",
            self.cut_number,
            self.description,
            self.dynamic_elements,
            self.background_music,
            self.sound_effects,
            self.narration
        )
    }
}

/// Editable text fields of a [`SceneCut`].
///
/// `cutNumber` and `description` are generation-derived and deliberately
/// absent here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SceneCutField {
    /// [`SceneCut::narration`]
    Narration,
    /// [`SceneCut::background_music`]
    BackgroundMusic,
    /// [`SceneCut::sound_effects`]
    SoundEffects,
    /// [`SceneCut::dynamic_elements`]
    DynamicElements,
}

/// Which part of a result to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The master prompt
    FullPrompt,
    /// The character at this index
    Character(usize),
    /// The scene cut at this index
    SceneCut(usize),
}

/// Master prompt, cast list and scene breakdown for one video.
///
/// An empty `scene_cuts` sequence is a valid result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResult {
    /// Single-paragraph master prompt
    pub full_prompt: String,
    /// Key figures, in display order
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Shots, in timeline order
    #[serde(default)]
    pub scene_cuts: Vec<SceneCut>,
}

impl StructuredResult {
    /// Text block for a copy action.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` session error when the index does not
    /// address an existing character or scene cut.
    ///
    /// # Examples
    ///
    /// ```
    /// use selah_core::{CopyTarget, StructuredResult};
    ///
    /// let result = StructuredResult { full_prompt: "A hill at dawn".into(), ..Default::default() };
    /// assert_eq!(result.copy_text(CopyTarget::FullPrompt).unwrap(), "A hill at dawn");
    /// assert!(result.copy_text(CopyTarget::SceneCut(0)).is_err());
    /// ```
    pub fn copy_text(&self, target: CopyTarget) -> Result<String, SessionError> {
        match target {
            CopyTarget::FullPrompt => Ok(self.full_prompt.clone()),
            CopyTarget::Character(index) => self
                .characters
                .get(index)
                .map(Character::copy_text)
                .ok_or_else(|| out_of_range("characters", index, self.characters.len())),
            CopyTarget::SceneCut(index) => self
                .scene_cuts
                .get(index)
                .map(SceneCut::copy_text)
                .ok_or_else(|| out_of_range("sceneCuts", index, self.scene_cuts.len())),
        }
    }
}

#[track_caller]
fn out_of_range(collection: &'static str, index: usize, len: usize) -> SessionError {
    SessionError::new(SessionErrorKind::IndexOutOfRange {
        collection,
        index,
        len,
    })
}
