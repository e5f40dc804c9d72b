use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotError, Result};
use crate::model::{next_id, normalize_text, Note};
use crate::store::{NoteStore, StorageBackend};

use super::helpers::display_entry;

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    text: &str,
    category: &str,
) -> Result<CmdResult> {
    let text = normalize_text(text).ok_or(JotError::EmptyNote)?;

    let notes = store.list()?;
    let note = Note::new(next_id(&notes), text, category.to_string());
    let note = store.append(note)?;

    let mut result = CmdResult::default();
    if let Some(entry) = display_entry(store, note.id)? {
        result.affected_notes.push(entry);
    }
    result.add_message(CmdMessage::success(format!("Note added: {}", note.text)));
    Ok(result)
}
