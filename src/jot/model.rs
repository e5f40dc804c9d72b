//! # Domain Model: Notes and Text Normalization
//!
//! This module defines the [`Note`] record and the rules that keep the
//! persisted collection well formed.
//!
//! ## The Note Record
//!
//! A note is a short piece of text tagged with a category and an optional
//! pinned flag. The persisted shape is fixed:
//!
//! ```text
//! { "id": 1712345678901, "text": "Buy milk", "category": "personal", "pinned": false }
//! ```
//!
//! ## Text Normalization
//!
//! Users paste text with stray whitespace and newlines. Note text is
//! trimmed on the way in, and a note whose text trims to nothing is
//! rejected; the store never holds an empty note.
//!
//! ## Id Assignment
//!
//! Ids are milliseconds since the Unix epoch at creation time. Two notes
//! created within the same millisecond would collide, so [`next_id`] takes
//! the current collection into account and bumps past the highest existing
//! id when the clock hasn't moved. Ids are strictly increasing within a
//! collection; uniqueness across independent stores is best-effort only.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub pinned: bool,
}

impl Note {
    /// Build a note from already-normalized text. Callers are expected to
    /// run the raw input through [`normalize_text`] first.
    pub fn new(id: i64, text: String, category: String) -> Self {
        Self {
            id,
            text,
            category,
            pinned: false,
        }
    }
}

/// Trims surrounding whitespace and collapses interior newlines to spaces.
/// Returns `None` if nothing remains; empty notes are never stored.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let flat: String = trimmed
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    Some(flat)
}

/// Next id for a collection: the current epoch-millis clock, bumped past
/// the highest existing id if the clock hasn't advanced.
pub fn next_id(notes: &[Note]) -> i64 {
    let now = Utc::now().timestamp_millis();
    match notes.iter().map(|n| n.id).max() {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}

/// Category with its first letter uppercased, for list display
/// ("personal" -> "Personal").
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
