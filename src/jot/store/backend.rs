use crate::error::Result;
use crate::model::Note;
use crate::theme::Theme;

/// Abstract interface for raw storage I/O over the two persisted keys.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`NoteStore`](super::note_store::NoteStore) handles the "what"
/// (read-modify-write cycles, id-keyed mutation, invariants).
pub trait StorageBackend {
    /// Load the note collection (the `notes` key).
    /// An absent key yields an empty collection, never an error.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Save the full note collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_notes(&self, notes: &[Note]) -> Result<()>;

    /// Load the theme preference (the `theme` key).
    /// Returns Ok(None) when the key has never been written.
    fn load_theme(&self) -> Result<Option<Theme>>;

    /// Save the theme preference.
    fn save_theme(&self, theme: Theme) -> Result<()>;
}
