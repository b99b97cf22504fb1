//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, feedback patterns
//! and the vocabulary a game is played over.

mod pattern;
mod vocabulary;
pub(crate) mod word;

pub use pattern::{Feedback, FeedbackRule, Pattern};
pub use vocabulary::{Vocabulary, VocabularyError};
pub use word::{MAX_WORD_LEN, Word, WordError};
