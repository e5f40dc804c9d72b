//! # Command Layer
//!
//! The core business logic. Each operation lives in its own submodule as a
//! pure function over a [`NoteStore`](crate::store::NoteStore), returning a
//! structured [`CmdResult`]: affected notes, notes to display, and leveled
//! messages. Commands never touch stdout, stderr, or process exits; the
//! CLI layer decides how to render what they return.
//!
//! Every mutating command is one read-modify-write round trip against the
//! store, keyed by note id. Display positions are a CLI input concern and
//! are resolved to ids before a command runs (see [`helpers`]).
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`MemBackend`](crate::store::MemBackend) to avoid filesystem
//! dependencies and verify both the returned `CmdResult` and the persisted
//! state after the call.

use crate::index::DisplayNote;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod pinning;
pub mod search;
pub mod theme;
pub mod update;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }
}
