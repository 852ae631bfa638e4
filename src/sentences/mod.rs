//! Sentence rotation for the Khmer reading drill
//!
//! This module provides:
//! - A shared, read-only sentence corpus
//! - Non-repeating random rotation through the corpus
//! - Zero-width-space stripping for display
//! - Corpus loading from JSON or plain-text files

pub mod builtin;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod rotator;
pub mod storage;

pub use errors::{SentenceError, SentenceResult};
pub use models::{Corpus, CyclePolicy, SentenceView};
pub use normalize::{contains_zero_width, strip_zero_width, ZERO_WIDTH_SPACE};
pub use rotator::SentenceRotator;
pub use storage::CorpusStorage;
