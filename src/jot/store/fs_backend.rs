use super::backend::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::Note;
use crate::theme::Theme;
use std::fs;
use std::path::{Path, PathBuf};

const NOTES_FILE: &str = "notes.json";
const THEME_FILE: &str = "theme.json";

/// Filesystem backend: one JSON file per persisted key inside the data
/// directory. Writes go through a tmp file and a rename so a crash can
/// never leave a torn file behind.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JotError::Io)?;
        }
        Ok(())
    }

    fn write_atomic(&self, file: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.root.join(file);
        let tmp = self.root.join(format!(".{}-{}.tmp", file, std::process::id()));
        fs::write(&tmp, content).map_err(JotError::Io)?;
        fs::rename(&tmp, target).map_err(JotError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        let path = self.root.join(NOTES_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(JotError::Io)?;
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(notes)
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        let content = serde_json::to_string_pretty(notes).map_err(JotError::Serialization)?;
        self.write_atomic(NOTES_FILE, &content)
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        let path = self.root.join(THEME_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(JotError::Io)?;
        let theme: Theme = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(Some(theme))
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        let content = serde_json::to_string(&theme).map_err(JotError::Serialization)?;
        self.write_atomic(THEME_FILE, &content)
    }
}
