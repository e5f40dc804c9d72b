use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::indexed_notes;

pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(indexed_notes(store)?))
}
