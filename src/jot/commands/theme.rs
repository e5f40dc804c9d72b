use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};
use crate::theme::Theme;

/// The persisted theme, with the light default applied.
pub fn current<B: StorageBackend>(store: &NoteStore<B>) -> Result<Theme> {
    store.theme()
}

pub fn set<B: StorageBackend>(store: &mut NoteStore<B>, theme: Theme) -> Result<CmdResult> {
    store.set_theme(theme)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
    Ok(result)
}

pub fn toggle<B: StorageBackend>(store: &mut NoteStore<B>) -> Result<CmdResult> {
    let next = store.theme()?.toggle();
    set(store, next)
}
