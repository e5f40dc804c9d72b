use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::indexed_notes;

/// Case-insensitive substring filter against text OR category. Read-only:
/// produces a view for rendering, never touches storage. Matches keep
/// their canonical positions from the full render ordering, so a position
/// read from search output is safe to pass to any mutating command.
pub fn run<B: StorageBackend>(store: &NoteStore<B>, query: &str) -> Result<CmdResult> {
    let query_lower = query.to_lowercase();

    let matches: Vec<_> = indexed_notes(store)?
        .into_iter()
        .filter(|dn| note_matches(&dn.note, &query_lower))
        .collect();

    let mut result = CmdResult::default().with_listed_notes(matches);
    if result.listed_notes.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes matching \"{}\"", query)));
    }
    Ok(result)
}

/// An empty query matches every note.
fn note_matches(note: &Note, query_lower: &str) -> bool {
    note.text.to_lowercase().contains(query_lower)
        || note.category.to_lowercase().contains(query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, pinning};
    use crate::store::MemBackend;

    fn seeded_store() -> NoteStore<MemBackend> {
        let mut store = NoteStore::with_backend(MemBackend::new());
        create::run(&mut store, "Buy milk", "personal").unwrap();
        create::run(&mut store, "Call mom", "personal").unwrap();
        store
    }

    #[test]
    fn test_search_matches_text() {
        let store = seeded_store();
        let result = run(&store, "milk").unwrap();

        let texts: Vec<_> = result
            .listed_notes
            .iter()
            .map(|dn| dn.note.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Buy milk"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = seeded_store();
        assert_eq!(run(&store, "MILK").unwrap().listed_notes.len(), 1);
        assert_eq!(run(&store, "buy MILK").unwrap().listed_notes.len(), 1);
    }

    #[test]
    fn test_search_matches_category() {
        let mut store = seeded_store();
        create::run(&mut store, "Standup agenda", "work").unwrap();

        let result = run(&store, "work").unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.text, "Standup agenda");
    }

    #[test]
    fn test_empty_query_matches_all() {
        let store = seeded_store();
        assert_eq!(run(&store, "").unwrap().listed_notes.len(), 2);
    }

    #[test]
    fn test_no_match_reports_info() {
        let store = seeded_store();
        let result = run(&store, "zebra").unwrap();

        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_search_does_not_mutate_storage() {
        let store = seeded_store();
        let before = store.list().unwrap();
        run(&store, "milk").unwrap();
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_matches_keep_canonical_positions() {
        let mut store = seeded_store();
        let second_id = store.list().unwrap()[1].id;
        pinning::pin(&mut store, &[second_id]).unwrap();

        // Render order: Call mom (1, pinned), Buy milk (2)
        let result = run(&store, "milk").unwrap();
        assert_eq!(result.listed_notes[0].position, 2);
    }
}
