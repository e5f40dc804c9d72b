use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::display_entry;

pub fn pin<B: StorageBackend>(store: &mut NoteStore<B>, ids: &[i64]) -> Result<CmdResult> {
    pin_state(store, ids, true)
}

pub fn unpin<B: StorageBackend>(store: &mut NoteStore<B>, ids: &[i64]) -> Result<CmdResult> {
    pin_state(store, ids, false)
}

/// Flip the pinned flag, whatever its current value.
pub fn toggle<B: StorageBackend>(store: &mut NoteStore<B>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &id in ids {
        let updated = store.mutate(id, |note| note.pinned = !note.pinned)?;
        report(store, &mut result, updated.id, updated.pinned, &updated.text)?;
    }
    Ok(result)
}

fn pin_state<B: StorageBackend>(
    store: &mut NoteStore<B>,
    ids: &[i64],
    pinned: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &id in ids {
        let updated = store.mutate(id, |note| note.pinned = pinned)?;
        report(store, &mut result, updated.id, pinned, &updated.text)?;
    }
    Ok(result)
}

fn report<B: StorageBackend>(
    store: &NoteStore<B>,
    result: &mut CmdResult,
    id: i64,
    pinned: bool,
    text: &str,
) -> Result<()> {
    let verb = if pinned { "pinned" } else { "unpinned" };
    result.add_message(CmdMessage::success(format!("Note {}: {}", verb, text)));
    if let Some(entry) = display_entry(store, id)? {
        result.affected_notes.push(entry);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};
    use crate::store::MemBackend;

    fn seeded_store() -> NoteStore<MemBackend> {
        let mut store = NoteStore::with_backend(MemBackend::new());
        create::run(&mut store, "A", "personal").unwrap();
        create::run(&mut store, "B", "work").unwrap();
        create::run(&mut store, "C", "ideas").unwrap();
        store
    }

    #[test]
    fn test_pin_moves_note_first_on_render() {
        let mut store = seeded_store();
        let last_id = store.list().unwrap()[2].id;

        pin(&mut store, &[last_id]).unwrap();

        let listed = list::run(&store).unwrap().listed_notes;
        assert_eq!(listed[0].note.text, "C");
        assert_eq!(listed[0].position, 1);
    }

    #[test]
    fn test_pin_does_not_change_persisted_order() {
        let mut store = seeded_store();
        let last_id = store.list().unwrap()[2].id;

        pin(&mut store, &[last_id]).unwrap();

        let texts: Vec<_> = store.list().unwrap().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["A", "B", "C"], "persisted order is insertion order");
    }

    #[test]
    fn test_unpin_restores_render_order() {
        let mut store = seeded_store();
        let last_id = store.list().unwrap()[2].id;

        pin(&mut store, &[last_id]).unwrap();
        unpin(&mut store, &[last_id]).unwrap();

        let listed = list::run(&store).unwrap().listed_notes;
        let texts: Vec<_> = listed.iter().map(|dn| dn.note.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut store = seeded_store();
        let id = store.list().unwrap()[0].id;

        toggle(&mut store, &[id]).unwrap();
        assert!(store.list().unwrap()[0].pinned);

        toggle(&mut store, &[id]).unwrap();
        assert!(!store.list().unwrap()[0].pinned);
    }

    #[test]
    fn test_pin_reports_new_position() {
        let mut store = seeded_store();
        let last_id = store.list().unwrap()[2].id;

        let result = pin(&mut store, &[last_id]).unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.affected_notes[0].position, 1);
    }
}
