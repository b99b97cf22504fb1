//! Word lists
//!
//! Provides the embedded default vocabulary and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Vocabulary;
use anyhow::{Context, Result, bail};

/// Build a vocabulary from `source`: `"default"` for the embedded list, otherwise a file path
///
/// `length` keeps only words of that length; without it a file must contain
/// words of a single length.
///
/// # Errors
///
/// Returns an error if the file cannot be read or no usable vocabulary remains.
pub fn load_vocabulary(source: &str, length: Option<usize>) -> Result<Vocabulary> {
    let words = if source == "default" {
        let words = loader::words_from_slice(WORDS);
        match length {
            Some(len) => words.into_iter().filter(|w| w.len() == len).collect(),
            None => words,
        }
    } else {
        loader::load_from_file(source, length)
            .with_context(|| format!("Failed to read word list {source}"))?
    };

    if words.is_empty() {
        match length {
            Some(len) => bail!("Word list '{source}' has no {len}-letter words"),
            None => bail!("Word list '{source}' has no valid words"),
        }
    }

    Vocabulary::new(words).with_context(|| format!("Invalid word list '{source}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_vocabulary_loads() {
        let vocabulary = load_vocabulary("default", None).unwrap();
        assert_eq!(vocabulary.len(), WORDS_COUNT);
        assert_eq!(vocabulary.word_length(), 5);
        for word in ["crane", "slate", "trace", "grape", "brake"] {
            assert!(vocabulary.contains(word), "{word} missing");
        }
    }

    #[test]
    fn default_vocabulary_has_no_other_lengths() {
        assert!(load_vocabulary("default", Some(4)).is_err());
        assert!(load_vocabulary("default", Some(5)).is_ok());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_vocabulary("/nonexistent/words.txt", None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
