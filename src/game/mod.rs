//! Puzzle state machine
//!
//! Holds the concealed target, scores guesses against it and tracks whether
//! the game is won, lost or still running.

use crate::core::{FeedbackRule, Pattern, Vocabulary, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Guesses the game refuses to score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game is already won or lost
    GameOver,
    /// The guess length differs from the target length
    WrongLength { expected: usize, found: usize },
    /// The word is not in the vocabulary
    NotInVocabulary(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is already over"),
            Self::WrongLength { expected, found } => {
                write!(f, "Guess must have {expected} letters, got {found}")
            }
            Self::NotInVocabulary(word) => write!(f, "Word '{word}' is not in the vocabulary"),
        }
    }
}

impl std::error::Error for GameError {}

/// One puzzle: a concealed target and the guesses played against it
#[derive(Debug, Clone)]
pub struct Game<'a> {
    vocabulary: &'a Vocabulary,
    target: &'a Word,
    max_guesses: usize,
    rule: FeedbackRule,
    turns: Vec<(Word, Pattern)>,
}

impl<'a> Game<'a> {
    /// Start a game with a chosen target
    ///
    /// # Errors
    /// Returns [`GameError::NotInVocabulary`] if `target` is not a vocabulary word.
    pub fn new(
        vocabulary: &'a Vocabulary,
        target: &str,
        max_guesses: usize,
        rule: FeedbackRule,
    ) -> Result<Self, GameError> {
        let target = vocabulary
            .get(&target.to_ascii_lowercase())
            .ok_or_else(|| GameError::NotInVocabulary(target.to_string()))?;

        Ok(Self {
            vocabulary,
            target,
            max_guesses,
            rule,
            turns: Vec::new(),
        })
    }

    /// Start a game with a uniformly random target and default settings
    pub fn random<R: Rng + ?Sized>(vocabulary: &'a Vocabulary, rng: &mut R) -> Self {
        // A vocabulary is never empty
        let index = rng.random_range(0..vocabulary.len());
        Self {
            vocabulary,
            target: &vocabulary[index],
            max_guesses: DEFAULT_MAX_GUESSES,
            rule: FeedbackRule::default(),
            turns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: FeedbackRule) -> Self {
        self.rule = rule;
        self
    }

    /// Score a guess against the target and record the turn
    ///
    /// # Errors
    /// - [`GameError::GameOver`] once the game is won or lost
    /// - [`GameError::WrongLength`] for a guess of the wrong length
    /// - [`GameError::NotInVocabulary`] for a word outside the vocabulary
    pub fn evaluate(&mut self, guess: &Word) -> Result<Pattern, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if guess.len() != self.target.len() {
            return Err(GameError::WrongLength {
                expected: self.target.len(),
                found: guess.len(),
            });
        }
        if !self.vocabulary.contains(guess.text()) {
            return Err(GameError::NotInVocabulary(guess.text().to_string()));
        }

        let pattern = Pattern::calculate(guess, self.target, self.rule);
        self.turns.push((guess.clone(), pattern));
        Ok(pattern)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.turns.last().is_some_and(|(_, p)| p.is_perfect()) {
            GameStatus::Won
        } else if self.turns.len() >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Turns played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.turns
    }

    /// Replay the same target from scratch
    pub fn restart(&mut self) {
        self.turns.clear();
    }

    #[must_use]
    pub const fn target(&self) -> &'a Word {
        self.target
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn rule(&self) -> FeedbackRule {
        self.rule
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.max_guesses.saturating_sub(self.turns.len())
    }
}

/// Pick `count` targets for a batch of games, with repetition
pub fn draw_targets<'a, R: Rng + ?Sized>(
    vocabulary: &'a Vocabulary,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    (0..count)
        .filter_map(|_| vocabulary.words().choose(rng))
        .collect()
}
