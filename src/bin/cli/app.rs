use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use khmer_drill_lib::config::AppConfig;
use khmer_drill_lib::rotator_from_config;
use khmer_drill_lib::sentences::{Corpus, SentenceRotator, SentenceView};

/// Command-line values that take precedence over the config file
#[derive(Debug, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub corpus_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub avoid_repeat: bool,
}

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub rotator: SentenceRotator<StdRng>,
}

impl App {
    pub fn new(overrides: Overrides) -> Result<Self> {
        let mut config = AppConfig::load(overrides.config_path.as_deref())
            .context("Failed to load configuration")?;

        if overrides.corpus_path.is_some() {
            config.corpus_path = overrides.corpus_path;
        }
        if overrides.seed.is_some() {
            config.seed = overrides.seed;
        }
        if overrides.avoid_repeat {
            config.avoid_repeat = true;
        }

        let rotator = rotator_from_config(&config).context("Failed to load sentences")?;

        Ok(Self { config, rotator })
    }

    pub fn corpus(&self) -> &Corpus {
        self.rotator.corpus()
    }

    /// Advance and return the new view
    pub fn next_sentence(&mut self) -> SentenceView {
        self.rotator.advance();
        self.rotator.view()
    }

    /// Display text for one corpus entry
    pub fn sentence_at(&self, index: usize) -> Result<String> {
        self.corpus()
            .display(index)
            .with_context(|| format!("No sentence at index {}", index))
    }
}
