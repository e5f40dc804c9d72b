use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("Note cannot be empty")]
    EmptyNote,

    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JotError>;
