//! Sentence error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or rotating sentences
#[derive(Debug, Error)]
pub enum SentenceError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Sentence index {index} out of range (corpus has {len} sentences)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Corpus file not found: {0}")]
    CorpusNotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SentenceError {
    pub(crate) fn empty_corpus() -> Self {
        Self::InvalidState("corpus must contain at least one sentence".to_string())
    }
}

/// Result type alias for sentence operations
pub type SentenceResult<T> = std::result::Result<T, SentenceError>;
