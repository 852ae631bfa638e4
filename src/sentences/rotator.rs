//! Non-repeating random rotation through a corpus
//!
//! Every sentence is shown exactly once per cycle, in random order. When the
//! cycle is exhausted the shown set is cleared and a new cycle starts.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::errors::SentenceResult;
use super::models::{Corpus, CyclePolicy, SentenceView};
use super::normalize::strip_zero_width;

type Listener = Box<dyn FnMut(&SentenceView)>;

pub struct SentenceRotator<R: Rng = ThreadRng> {
    corpus: Corpus,
    /// Indices shown since the last reset
    shown: HashSet<usize>,
    current_index: usize,
    /// Index barred from the first draw after a cycle boundary
    exclude_next: Option<usize>,
    policy: CyclePolicy,
    rng: R,
    listeners: Vec<Listener>,
}

impl SentenceRotator<ThreadRng> {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_rng(corpus, rand::thread_rng())
    }

    /// Build a rotator straight from sentences, failing on an empty list
    pub fn from_sentences(sentences: Vec<String>) -> SentenceResult<Self> {
        Ok(Self::new(Corpus::new(sentences)?))
    }
}

impl<R: Rng> SentenceRotator<R> {
    /// Build a rotator drawing from `rng`
    ///
    /// The current index starts at 0 with an empty cycle, so the first
    /// sentence is visible before any draw has happened.
    pub fn with_rng(corpus: Corpus, rng: R) -> Self {
        Self {
            shown: HashSet::with_capacity(corpus.len()),
            corpus,
            current_index: 0,
            exclude_next: None,
            policy: CyclePolicy::default(),
            rng,
            listeners: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: CyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current sentence with zero-width spaces removed
    pub fn current_sentence(&self) -> String {
        strip_zero_width(&self.corpus[self.current_index]).into_owned()
    }

    pub fn shown_this_cycle(&self) -> usize {
        self.shown.len()
    }

    pub fn remaining_in_cycle(&self) -> usize {
        self.corpus.len() - self.shown.len()
    }

    /// Forget what has been shown; the current sentence stays put
    pub fn reset_cycle(&mut self) {
        self.shown.clear();
        self.exclude_next = self.boundary_exclusion();
    }

    /// The sentence on screen, when the policy keeps it out of the next draw
    fn boundary_exclusion(&self) -> Option<usize> {
        if self.policy == CyclePolicy::AvoidRepeat && self.corpus.len() > 1 {
            Some(self.current_index)
        } else {
            None
        }
    }

    pub fn view(&self) -> SentenceView {
        SentenceView {
            index: self.current_index,
            text: self.current_sentence(),
            shown_this_cycle: self.shown.len(),
            corpus_len: self.corpus.len(),
        }
    }

    /// Register a hook called with the new view after every `advance`
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&SentenceView) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Move to a random sentence not yet shown in this cycle.
    ///
    /// Returns the selected index.
    pub fn advance(&mut self) -> usize {
        let len = self.corpus.len();

        if self.shown.len() == len {
            self.shown.clear();
            self.exclude_next = self.boundary_exclusion();
            log::debug!("All {} sentences shown, starting a new cycle", len);
        }

        let excluded = self.exclude_next.take();

        let available: Vec<usize> = (0..len)
            .filter(|i| !self.shown.contains(i) && Some(*i) != excluded)
            .collect();

        // `available` is never empty: the shown set is below `len` here and
        // an exclusion only happens when there is more than one sentence.
        let next = available
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(self.current_index);

        self.current_index = next;
        self.shown.insert(next);
        log::debug!(
            "Selected sentence {} ({}/{} this cycle)",
            next,
            self.shown.len(),
            len
        );

        if !self.listeners.is_empty() {
            let view = self.view();
            for listener in self.listeners.iter_mut() {
                listener(&view);
            }
        }

        next
    }
}
