//! Data models for the sentence drill

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{SentenceError, SentenceResult};
use super::normalize::strip_zero_width;

/// Ordered, immutable list of sentences.
///
/// Cloning is cheap; clones share the same backing slice, so several
/// rotators can drill the same corpus independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub(super) sentences: Arc<[String]>,
}

impl Corpus {
    /// Build a corpus, failing if there are no sentences
    pub fn new(sentences: Vec<String>) -> SentenceResult<Self> {
        if sentences.is_empty() {
            return Err(SentenceError::empty_corpus());
        }
        Ok(Self {
            sentences: sentences.into(),
        })
    }

    pub fn from_strs<S: AsRef<str>>(sentences: &[S]) -> SentenceResult<Self> {
        Self::new(sentences.iter().map(|s| s.as_ref().to_string()).collect())
    }

    /// Raw entry, zero-width spaces included
    pub fn raw(&self, index: usize) -> SentenceResult<&str> {
        self.sentences
            .get(index)
            .map(String::as_str)
            .ok_or(SentenceError::IndexOutOfRange {
                index,
                len: self.sentences.len(),
            })
    }

    /// Entry prepared for display
    pub fn display(&self, index: usize) -> SentenceResult<String> {
        self.raw(index).map(|s| strip_zero_width(s).into_owned())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }
}

impl Deref for Corpus {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.sentences
    }
}

/// What happens at the boundary between two cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CyclePolicy {
    /// Any sentence may open the new cycle, including the one just shown
    #[default]
    AllowRepeat,
    /// The last sentence of a cycle is never the first of the next one
    /// (ignored for single-sentence corpora)
    AvoidRepeat,
}

/// Snapshot of the rotator's current position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceView {
    pub index: usize,
    pub text: String,
    pub shown_this_cycle: usize,
    pub corpus_len: usize,
}

impl SentenceView {
    /// True once every sentence of the corpus has been shown this cycle
    pub fn cycle_complete(&self) -> bool {
        self.shown_this_cycle == self.corpus_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_is_invalid_state() {
        let result = Corpus::new(Vec::new());
        assert!(matches!(result, Err(SentenceError::InvalidState(_))));
    }

    #[test]
    fn test_display_strips_zero_width() {
        let corpus = Corpus::from_strs(&["A\u{200B}", "B"]).unwrap();
        assert_eq!(corpus.raw(0).unwrap(), "A\u{200B}");
        assert_eq!(corpus.display(0).unwrap(), "A");
    }

    #[test]
    fn test_out_of_range_index() {
        let corpus = Corpus::from_strs(&["A"]).unwrap();
        match corpus.raw(3) {
            Err(SentenceError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_clones_share_storage() {
        let corpus = Corpus::from_strs(&["A", "B"]).unwrap();
        let other = corpus.clone();
        assert!(std::ptr::eq(corpus.as_slice(), other.as_slice()));
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = SentenceView {
            index: 1,
            text: "B".to_string(),
            shown_this_cycle: 2,
            corpus_len: 3,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["shownThisCycle"], 2);
        assert_eq!(json["corpusLen"], 3);
        assert!(!view.cycle_complete());
    }

    #[test]
    fn test_policy_serde() {
        let policy: CyclePolicy = serde_json::from_str("\"avoidRepeat\"").unwrap();
        assert_eq!(policy, CyclePolicy::AvoidRepeat);
        assert_eq!(CyclePolicy::default(), CyclePolicy::AllowRepeat);
    }
}
