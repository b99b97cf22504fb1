//! Fixed-length word vocabulary
//!
//! The ordered, immutable set of words a game is played over.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;

/// Ordered list of words that all share one length
///
/// Lookups by text go through an index built once at construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    word_length: usize,
    index: FxHashMap<String, usize>,
}

/// Error type for invalid vocabularies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    Empty,
    MixedLengths { expected: usize, word: String },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary must contain at least one word"),
            Self::MixedLengths { expected, word } => write!(
                f,
                "All words must have {expected} letters, '{word}' has {}",
                word.len()
            ),
        }
    }
}

impl std::error::Error for VocabularyError {}

impl Vocabulary {
    /// Create a vocabulary from an ordered list of words
    ///
    /// Order is preserved. Duplicate entries are kept; lookups resolve to the
    /// first occurrence.
    ///
    /// # Errors
    /// Returns `VocabularyError` if the list is empty or the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Vocabulary, Word};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let vocabulary = Vocabulary::new(words).unwrap();
    /// assert_eq!(vocabulary.word_length(), 5);
    /// assert!(vocabulary.contains("slate"));
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        let word_length = words.first().ok_or(VocabularyError::Empty)?.len();

        if let Some(odd) = words.iter().find(|w| w.len() != word_length) {
            return Err(VocabularyError::MixedLengths {
                expected: word_length,
                word: odd.text().to_string(),
            });
        }

        let mut index = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            index.entry(word.text().to_string()).or_insert(i);
        }

        Ok(Self {
            words,
            word_length,
            index,
        })
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check whether `text` is in the vocabulary
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Look up a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    /// Position of a word in the vocabulary order
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }
}

impl Deref for Vocabulary {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn vocabulary_preserves_order() {
        let vocabulary = Vocabulary::new(words_from_slice(&["slate", "crane", "trace"])).unwrap();
        let texts: Vec<&str> = vocabulary.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "trace"]);
        assert_eq!(vocabulary.position("trace"), Some(2));
    }

    #[test]
    fn vocabulary_rejects_empty() {
        assert_eq!(Vocabulary::new(vec![]).unwrap_err(), VocabularyError::Empty);
    }

    #[test]
    fn vocabulary_rejects_mixed_lengths() {
        let err = Vocabulary::new(words_from_slice(&["crane", "cat"])).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::MixedLengths {
                expected: 5,
                word: "cat".to_string()
            }
        );
    }

    #[test]
    fn vocabulary_duplicates_resolve_to_first() {
        let vocabulary = Vocabulary::new(words_from_slice(&["crane", "slate", "crane"])).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.position("crane"), Some(0));
    }

    #[test]
    fn vocabulary_lookup() {
        let vocabulary = Vocabulary::new(words_from_slice(&["crane", "slate"])).unwrap();
        assert_eq!(vocabulary.get("slate").map(Word::text), Some("slate"));
        assert!(vocabulary.get("trace").is_none());
        assert!(!vocabulary.contains("trace"));
    }
}
