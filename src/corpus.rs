//! Word lists exported from the grammar corpus
//!
//! The corpus export writes one lemma or form per line. Lemmas may carry `+`
//! stress marks, which are not letters and are removed here.

use std::path::Path;

use crate::error::Result;
use crate::storage::read_lines;

const STRESS_MARK: char = '+';

/// Strip stress marks and lowercase
pub fn normalize_word(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|&c| c != STRESS_MARK)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read a corpus word list, normalizing every entry and keeping its order
pub fn read_corpus_words(path: &Path) -> Result<Vec<String>> {
    let words: Vec<String> = read_lines(path)?
        .iter()
        .map(|w| normalize_word(w))
        .filter(|w| !w.is_empty())
        .collect();
    log::info!("{} corpus words read from {}", words.len(), path.display());
    Ok(words)
}
