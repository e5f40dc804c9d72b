use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::normalize_text;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::display_entry;

/// Replace a note's text. Replacement text that trims to nothing is a
/// silent no-op: no message, no write. (A cancelled edit never reaches
/// this function; the CLI maps "no text supplied" to not calling it.)
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    id: i64,
    new_text: &str,
) -> Result<CmdResult> {
    let text = match normalize_text(new_text) {
        Some(text) => text,
        None => return Ok(CmdResult::default()),
    };

    let updated = store.mutate(id, |note| note.text = text)?;

    let mut result = CmdResult::default();
    if let Some(entry) = display_entry(store, updated.id)? {
        result.affected_notes.push(entry);
    }
    result.add_message(CmdMessage::success(format!("Note updated: {}", updated.text)));
    Ok(result)
}
