use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod config;
pub mod sentences;

use config::AppConfig;
use sentences::{CorpusStorage, SentenceResult, SentenceRotator};

/// Build a rotator from the configured corpus, seed and cycle policy
pub fn rotator_from_config(config: &AppConfig) -> SentenceResult<SentenceRotator<StdRng>> {
    let corpus = CorpusStorage::load_or_builtin(config.corpus_path.as_deref())?;

    let rng = match config.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    Ok(SentenceRotator::with_rng(corpus, rng).with_policy(config.cycle_policy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentences::CyclePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rotator_from_default_config_uses_builtin() {
        let rotator = rotator_from_config(&AppConfig::default()).unwrap();
        assert_eq!(rotator.len(), crate::sentences::builtin::KHMER_SENTENCES.len());
        assert_eq!(rotator.policy(), CyclePolicy::AllowRepeat);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = AppConfig {
            seed: Some(7),
            avoid_repeat: true,
            ..AppConfig::default()
        };
        let mut a = rotator_from_config(&config).unwrap();
        let mut b = rotator_from_config(&config).unwrap();

        assert_eq!(a.policy(), CyclePolicy::AvoidRepeat);
        for _ in 0..30 {
            assert_eq!(a.advance(), b.advance());
        }
    }

    #[test]
    fn test_empty_corpus_file_fails_fast() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "\n").unwrap();

        let config = AppConfig {
            corpus_path: Some(path),
            ..AppConfig::default()
        };
        assert!(rotator_from_config(&config).is_err());
    }
}
