//! Error type shared by the store, the list operations and the front end.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// A 1-based index outside `[1, len]`. Carries the index the user typed.
    #[error("Index {0} is out of range.")]
    OutOfRange(i64),

    /// The user interrupted the reword prompt.
    #[error("Cancelled")]
    Cancelled,

    #[error("Cannot determine home directory")]
    NoHomeDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed todo file: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
