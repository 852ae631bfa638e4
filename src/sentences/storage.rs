//! Loading and saving sentence corpora
//!
//! Two file formats are understood:
//! ```text
//! sentences.json   # JSON array of strings
//! sentences.txt    # one sentence per line, `#` starts a comment line
//! ```
//! Any extension other than `.json` is read as plain text.

use std::fs;
use std::path::{Path, PathBuf};

use super::builtin::khmer_corpus;
use super::errors::{SentenceError, SentenceResult};
use super::models::Corpus;

/// Corpus source selection
pub struct CorpusStorage;

impl CorpusStorage {
    /// Load the corpus at `path`, or the bundled one when no path is given
    pub fn load_or_builtin(path: Option<&Path>) -> SentenceResult<Corpus> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let corpus = Self::builtin();
                log::info!("Using built-in corpus ({} sentences)", corpus.len());
                Ok(corpus)
            }
        }
    }

    pub fn builtin() -> Corpus {
        khmer_corpus()
    }

    /// Load a corpus file, failing fast if it yields no sentences
    pub fn load(path: &Path) -> SentenceResult<Corpus> {
        if !path.exists() {
            return Err(SentenceError::CorpusNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let sentences = if is_json(path) {
            parse_json(&content)?
        } else {
            parse_lines(&content)
        };

        let corpus = Corpus::new(sentences).map_err(|_| {
            SentenceError::InvalidState(format!(
                "corpus file {} contains no sentences",
                path.display()
            ))
        })?;

        log::info!(
            "Loaded {} sentences from {}",
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }

    /// Write the corpus as a pretty-printed JSON array
    pub fn save_json(path: &Path, corpus: &Corpus) -> SentenceResult<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(corpus.as_slice())?)?;
        Ok(path.to_path_buf())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn parse_json(content: &str) -> SentenceResult<Vec<String>> {
    let sentences: Vec<String> = serde_json::from_str(content)?;
    Ok(sentences
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect())
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
