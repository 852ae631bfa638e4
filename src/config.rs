//! Drill configuration
//!
//! Read from `config.toml` under the platform config directory
//! (e.g. `~/.config/khmer-drill/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sentences::CyclePolicy;

/// Longest accepted auto-advance interval (one hour)
const MAX_AUTO_ADVANCE_SECS: u64 = 3600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Corpus file to drill instead of the built-in sentences
    pub corpus_path: Option<PathBuf>,
    /// Never open a new cycle with the sentence that closed the last one
    pub avoid_repeat: bool,
    /// Fixed RNG seed for a reproducible order
    pub seed: Option<u64>,
    /// Advance automatically every N seconds in the TUI
    pub auto_advance_secs: Option<u64>,
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("khmer-drill").join("config.toml")
    }

    /// Load from `path`, or the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;

        let mut config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;

        // Relative corpus paths are taken from the config file's directory
        if let (Some(corpus), Some(dir)) = (config.corpus_path.as_ref(), path.parent()) {
            if corpus.is_relative() {
                config.corpus_path = Some(dir.join(corpus));
            }
        }

        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(secs) = self.auto_advance_secs {
            if secs == 0 || secs > MAX_AUTO_ADVANCE_SECS {
                return Err(ConfigError::Validation(format!(
                    "auto_advance_secs must be between 1 and {}, got {}",
                    MAX_AUTO_ADVANCE_SECS, secs
                )));
            }
        }
        Ok(())
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        if self.avoid_repeat {
            CyclePolicy::AvoidRepeat
        } else {
            CyclePolicy::AllowRepeat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(Some(&temp.path().join("config.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cycle_policy(), CyclePolicy::AllowRepeat);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = AppConfig::parse(
            r#"
            corpus_path = "/tmp/sentences.txt"
            avoid_repeat = true
            seed = 42
            auto_advance_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.corpus_path, Some(PathBuf::from("/tmp/sentences.txt")));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.auto_advance_secs, Some(10));
        assert_eq!(config.cycle_policy(), CyclePolicy::AvoidRepeat);
    }

    #[test]
    fn test_relative_corpus_path_resolved_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "corpus_path = \"sentences.json\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.corpus_path, Some(temp.path().join("sentences.json")));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "seed = \"not a number\"\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_auto_advance_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "auto_advance_secs = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }
}
