//! Error types for sequence validation and result export

use std::path::PathBuf;

use thiserror::Error;

/// Why an input sequence was rejected before any search ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("Please enter a DNA sequence.")]
    EmptyInput,

    #[error("Invalid character '{found}' at position {position}. DNA sequence must contain only A, T, G, or C.")]
    InvalidAlphabet { found: char, position: usize },

    #[error("Sequence is {length} bases long; enter a sequence at least {minimum} bases long.")]
    TooShort { length: usize, minimum: usize },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export. Design primers first.")]
    NothingToExport,

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
