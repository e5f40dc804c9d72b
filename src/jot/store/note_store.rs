use super::backend::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::Note;
use crate::theme::Theme;

/// The single owning repository for the persisted state.
///
/// Every operation is a full read-modify-write cycle against the `notes`
/// key: load the whole collection, transform it, write the whole thing
/// back. Mutations are keyed by note id, never by display position, and
/// mutating methods take `&mut self`, so per store instance operations are
/// totally ordered.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The collection in persisted (insertion) order.
    pub fn list(&self) -> Result<Vec<Note>> {
        self.backend.load_notes()
    }

    /// Replace the full collection. The store never persists a note whose
    /// text trims to nothing.
    pub fn save(&mut self, notes: &[Note]) -> Result<()> {
        if notes.iter().any(|n| n.text.trim().is_empty()) {
            return Err(JotError::EmptyNote);
        }
        self.backend.save_notes(notes)
    }

    /// Append a note to the end of the collection.
    pub fn append(&mut self, note: Note) -> Result<Note> {
        let mut notes = self.backend.load_notes()?;
        notes.push(note.clone());
        self.save(&notes)?;
        Ok(note)
    }

    /// Apply `f` to the note with the given id and persist the result.
    /// Returns the note after mutation.
    pub fn mutate<F>(&mut self, id: i64, f: F) -> Result<Note>
    where
        F: FnOnce(&mut Note),
    {
        let mut notes = self.backend.load_notes()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(JotError::NoteNotFound(id))?;
        f(note);
        let updated = note.clone();
        self.save(&notes)?;
        Ok(updated)
    }

    /// Remove the note with the given id and persist the shortened
    /// collection. Returns the removed note.
    pub fn remove(&mut self, id: i64) -> Result<Note> {
        let mut notes = self.backend.load_notes()?;
        let pos = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(JotError::NoteNotFound(id))?;
        let removed = notes.remove(pos);
        self.save(&notes)?;
        Ok(removed)
    }

    /// The persisted theme, defaulting to light when never written.
    pub fn theme(&self) -> Result<Theme> {
        Ok(self.backend.load_theme()?.unwrap_or_default())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.backend.save_theme(theme)
    }
}
