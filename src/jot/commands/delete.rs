use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let removed = store.remove(id)?;
        result.add_message(CmdMessage::success(format!("Note deleted: {}", removed.text)));
    }

    Ok(result)
}
