use crate::commands::helpers::resolve_positions;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};
use crate::theme::Theme;

/// Thin facade over the command layer. This is where user-facing display
/// positions are normalized to note ids; everything below operates on ids
/// only.
pub struct JotApi<B: StorageBackend> {
    store: NoteStore<B>,
}

impl<B: StorageBackend> JotApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self { store }
    }

    pub fn add(&mut self, text: &str, category: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, text, category)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn edit(&mut self, position: usize, new_text: &str) -> Result<CmdResult> {
        let ids = resolve_positions(&self.store, &[position])?;
        commands::update::run(&mut self.store, ids[0], new_text)
    }

    pub fn delete(&mut self, positions: &[usize]) -> Result<CmdResult> {
        let ids = resolve_positions(&self.store, positions)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn pin(&mut self, positions: &[usize]) -> Result<CmdResult> {
        let ids = resolve_positions(&self.store, positions)?;
        commands::pinning::pin(&mut self.store, &ids)
    }

    pub fn unpin(&mut self, positions: &[usize]) -> Result<CmdResult> {
        let ids = resolve_positions(&self.store, positions)?;
        commands::pinning::unpin(&mut self.store, &ids)
    }

    pub fn toggle_pin(&mut self, positions: &[usize]) -> Result<CmdResult> {
        let ids = resolve_positions(&self.store, positions)?;
        commands::pinning::toggle(&mut self.store, &ids)
    }

    pub fn theme(&self) -> Result<Theme> {
        commands::theme::current(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<CmdResult> {
        commands::theme::set(&mut self.store, theme)
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.store)
    }
}
