//! The current result and its edit operations.

use selah_core::{CharacterField, CopyTarget, SceneCutField, StructuredResult};
use selah_error::{SessionError, SessionErrorKind};

/// Holder of the current result.
///
/// Edits never mutate in place: each returns a new store. With no result
/// present every edit is a no-op returning an unchanged store. An
/// out-of-range index fails and leaves the original untouched.
///
/// # Examples
///
/// ```
/// use selah_core::StructuredResult;
/// use selah_session::ResultStore;
///
/// let store = ResultStore::new(StructuredResult {
///     full_prompt: "Dawn over Galilee".into(),
///     ..Default::default()
/// });
///
/// let edited = store.set_full_prompt("Dusk over Galilee");
/// assert_eq!(edited.current().unwrap().full_prompt, "Dusk over Galilee");
/// assert_eq!(store.current().unwrap().full_prompt, "Dawn over Galilee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultStore {
    result: Option<StructuredResult>,
}

impl ResultStore {
    /// Store holding `result`.
    pub fn new(result: StructuredResult) -> Self {
        Self {
            result: Some(result),
        }
    }

    /// Store with no result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The current result.
    pub fn current(&self) -> Option<&StructuredResult> {
        self.result.as_ref()
    }

    /// Whether no result is present.
    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }

    /// Replace the master prompt.
    pub fn set_full_prompt(&self, text: impl Into<String>) -> Self {
        self.edit(|result| {
            result.full_prompt = text.into();
            Ok(())
        })
        .unwrap_or_else(|_| self.clone())
    }

    /// Replace one field of the character at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` naming `characters` when `index` is past the end.
    pub fn set_character_field(
        &self,
        index: usize,
        field: CharacterField,
        value: impl Into<String>,
    ) -> Result<Self, SessionError> {
        self.edit(|result| {
            let len = result.characters.len();
            let character = result
                .characters
                .get_mut(index)
                .ok_or_else(|| out_of_range("characters", index, len))?;
            let slot = match field {
                CharacterField::Name => &mut character.name,
                CharacterField::Description => &mut character.description,
            };
            *slot = value.into();
            Ok(())
        })
    }

    /// Replace one editable field of the scene cut at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` naming `sceneCuts` when `index` is past the end.
    pub fn set_scene_cut_field(
        &self,
        index: usize,
        field: SceneCutField,
        value: impl Into<String>,
    ) -> Result<Self, SessionError> {
        self.edit(|result| {
            let len = result.scene_cuts.len();
            let cut = result
                .scene_cuts
                .get_mut(index)
                .ok_or_else(|| out_of_range("sceneCuts", index, len))?;
            let slot = match field {
                SceneCutField::Narration => &mut cut.narration,
                SceneCutField::BackgroundMusic => &mut cut.background_music,
                SceneCutField::SoundEffects => &mut cut.sound_effects,
                SceneCutField::DynamicElements => &mut cut.dynamic_elements,
            };
            *slot = value.into();
            Ok(())
        })
    }

    /// Clipboard text for `target`, or `None` with no result.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `target` addresses a missing element.
    pub fn copy_text(&self, target: CopyTarget) -> Result<Option<String>, SessionError> {
        self.result
            .as_ref()
            .map(|result| result.copy_text(target))
            .transpose()
    }

    fn edit<F>(&self, apply: F) -> Result<Self, SessionError>
    where
        F: FnOnce(&mut StructuredResult) -> Result<(), SessionError>,
    {
        let Some(current) = &self.result else {
            return Ok(self.clone());
        };
        let mut next = current.clone();
        apply(&mut next)?;
        Ok(Self::new(next))
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
