use crate::error::Result;
use crate::index::{index_notes, resolve_position, DisplayNote};
use crate::store::{NoteStore, StorageBackend};

pub fn indexed_notes<B: StorageBackend>(store: &NoteStore<B>) -> Result<Vec<DisplayNote>> {
    let notes = store.list()?;
    Ok(index_notes(notes))
}

/// Resolves display positions to note ids against a fresh listing.
/// Resolution happens once, up front, so a batch like `delete 1 3` acts on
/// the notes the user saw, not on positions shifted by its own deletions.
pub fn resolve_positions<B: StorageBackend>(
    store: &NoteStore<B>,
    positions: &[usize],
) -> Result<Vec<i64>> {
    let notes = store.list()?;
    positions
        .iter()
        .map(|&pos| resolve_position(&notes, pos))
        .collect()
}

/// Finds the display entry for a note id after a mutation, for reporting
/// the note at its new position.
pub fn display_entry<B: StorageBackend>(
    store: &NoteStore<B>,
    id: i64,
) -> Result<Option<DisplayNote>> {
    Ok(indexed_notes(store)?
        .into_iter()
        .find(|dn| dn.note.id == id))
}
