use super::backend::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::Note;
use crate::theme::Theme;
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since jot is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    notes: RefCell<Vec<Note>>,
    theme: RefCell<Option<Theme>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            notes: RefCell::new(Vec::new()),
            theme: RefCell::new(None),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone())
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JotError::Store("Simulated write error".to_string()));
        }
        *self.notes.borrow_mut() = notes.to_vec();
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        Ok(*self.theme.borrow())
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JotError::Store("Simulated write error".to_string()));
        }
        *self.theme.borrow_mut() = Some(theme);
        Ok(())
    }
}
