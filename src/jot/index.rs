//! # Display Positions: Render Order vs. Persisted Order
//!
//! The store keeps notes in insertion order and never reorders them. The
//! list view, however, always shows pinned notes first. This module owns
//! that render-time ordering and the 1-based display positions users type
//! into the CLI.
//!
//! ## Canonical Ordering
//!
//! The ordering is a stable two-pass walk: pinned notes in insertion
//! order, then unpinned notes in insertion order. Positions are assigned
//! over that full ordering, and a filtered view (search) keeps each
//! match's canonical position rather than renumbering. This ensures
//! `jot delete 2` always targets the same note regardless of the current
//! view.
//!
//! ## Positions Are Input Only
//!
//! A position is resolved to a note id against a fresh listing before any
//! mutation; nothing downstream of [`resolve_position`] ever operates on a
//! position. Two quick successive commands therefore cannot act on a stale
//! snapshot's offsets: the second command re-resolves against whatever the
//! first one wrote.

use crate::error::{JotError, Result};
use crate::model::Note;

/// A note paired with its canonical 1-based display position.
#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub position: usize,
}

/// Orders a collection for display: pinned first, then unpinned, each
/// group in persisted (insertion) order, with positions 1..N assigned
/// over the result. The input order is the persisted order.
pub fn index_notes(notes: Vec<Note>) -> Vec<DisplayNote> {
    let mut results = Vec::with_capacity(notes.len());

    // First pass: pinned
    for note in notes.iter().filter(|n| n.pinned) {
        results.push(note.clone());
    }
    // Second pass: unpinned
    for note in notes.iter().filter(|n| !n.pinned) {
        results.push(note.clone());
    }

    results
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note,
            position: i + 1,
        })
        .collect()
}

/// Resolves a display position to the id of the note it currently names.
pub fn resolve_position(notes: &[Note], position: usize) -> Result<i64> {
    index_notes(notes.to_vec())
        .into_iter()
        .find(|dn| dn.position == position)
        .map(|dn| dn.note.id)
        .ok_or_else(|| JotError::Api(format!("No note at position {}", position)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_note(id: i64, text: &str, pinned: bool) -> Note {
        let mut n = Note::new(id, text.to_string(), "personal".to_string());
        n.pinned = pinned;
        n
    }

    #[test]
    fn test_pinned_sort_before_unpinned() {
        let notes = vec![
            make_note(1, "A", false),
            make_note(2, "B", true),
            make_note(3, "C", false),
        ];
        let indexed = index_notes(notes);

        let texts: Vec<_> = indexed.iter().map(|dn| dn.note.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_ordering_is_stable_within_groups() {
        let notes = vec![
            make_note(1, "A", true),
            make_note(2, "B", false),
            make_note(3, "C", true),
            make_note(4, "D", false),
        ];
        let indexed = index_notes(notes);

        let texts: Vec<_> = indexed.iter().map(|dn| dn.note.text.as_str()).collect();
        // Pinned keep their relative order, as do unpinned.
        assert_eq!(texts, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_positions_are_one_based_and_dense() {
        let notes = vec![make_note(1, "A", false), make_note(2, "B", true)];
        let indexed = index_notes(notes);

        let positions: Vec<_> = indexed.iter().map(|dn| dn.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_resolve_position_follows_render_order() {
        let notes = vec![
            make_note(10, "A", false),
            make_note(20, "B", true),
            make_note(30, "C", false),
        ];
        // Render order: B (p1), A (p2), C (p3)
        assert_eq!(resolve_position(&notes, 1).unwrap(), 20);
        assert_eq!(resolve_position(&notes, 2).unwrap(), 10);
        assert_eq!(resolve_position(&notes, 3).unwrap(), 30);
    }

    #[test]
    fn test_resolve_position_out_of_range() {
        let notes = vec![make_note(1, "A", false)];
        assert!(resolve_position(&notes, 0).is_err());
        assert!(resolve_position(&notes, 2).is_err());
    }
}
