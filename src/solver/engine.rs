//! Main solver interface
//!
//! The solver drives one game: it folds each outcome into the constraints,
//! recomputes the candidates and asks its strategy for the next guess.

use super::constraints::Constraints;
use super::filter::filter_candidates;
use super::strategy::{Strategy, Turn};
use crate::core::{FeedbackRule, Pattern, Vocabulary, Word};
use rand::Rng;
use std::fmt;

/// Reasons the solver cannot produce a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No vocabulary word is consistent with the feedback so far
    NoCandidates,
    /// A guess was emitted but its outcome was not reported
    MissingOutcome,
    /// The reported outcome does not cover the whole word
    OutcomeLength { expected: usize, found: usize },
    /// The reported guess is not in the vocabulary
    UnknownGuess(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "No candidate is consistent with the feedback"),
            Self::MissingOutcome => write!(f, "The outcome of the previous guess is missing"),
            Self::OutcomeLength { expected, found } => {
                write!(f, "Outcome covers {found} letters, expected {expected}")
            }
            Self::UnknownGuess(word) => write!(f, "Guess '{word}' is not in the vocabulary"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Main solver
///
/// Owns the per-game state (constraints, guess history, current candidates),
/// the strategy and the random number generator. A turn either commits fully
/// or, on error, leaves every piece of state as it was.
#[derive(Debug, Clone)]
pub struct Solver<'a, S: Strategy, R: Rng> {
    strategy: S,
    vocabulary: &'a Vocabulary,
    rng: R,
    rule: FeedbackRule,
    opening: Option<&'a Word>,
    constraints: Constraints,
    history: Vec<Word>,
    candidates: Vec<&'a Word>,
    awaiting: Option<&'a Word>,
}

impl<'a, S: Strategy, R: Rng> Solver<'a, S, R> {
    /// Create a solver for a fresh game over `vocabulary`
    pub fn new(strategy: S, vocabulary: &'a Vocabulary, rng: R) -> Self {
        Self {
            strategy,
            vocabulary,
            rng,
            rule: FeedbackRule::default(),
            opening: None,
            constraints: Constraints::new(vocabulary.word_length()),
            history: Vec::new(),
            candidates: vocabulary.iter().collect(),
            awaiting: None,
        }
    }

    /// Use `rule` when strategies simulate feedback between words
    #[must_use]
    pub fn with_rule(mut self, rule: FeedbackRule) -> Self {
        self.rule = rule;
        self
    }

    /// Always open with `word` instead of asking the strategy
    ///
    /// # Errors
    /// Returns [`SolverError::UnknownGuess`] if `word` is not in the vocabulary.
    pub fn with_opening(mut self, word: &str) -> Result<Self, SolverError> {
        let opening = self
            .vocabulary
            .get(word)
            .ok_or_else(|| SolverError::UnknownGuess(word.to_string()))?;
        self.opening = Some(opening);
        Ok(self)
    }

    /// Produce the next guess
    ///
    /// `previous` carries the guess just played and its outcome; pass `None`
    /// only on the first turn. The played guess need not be the one this
    /// solver suggested.
    ///
    /// # Errors
    /// - [`SolverError::MissingOutcome`] if `previous` is `None` after the first turn
    /// - [`SolverError::OutcomeLength`] if the outcome length is not the word length
    /// - [`SolverError::UnknownGuess`] if the played guess is not in the vocabulary
    /// - [`SolverError::NoCandidates`] if nothing is left to guess
    ///
    /// On error the solver state is unchanged.
    pub fn next_guess(&mut self, previous: Option<(&Word, Pattern)>) -> Result<&'a Word, SolverError> {
        let vocabulary: &'a Vocabulary = self.vocabulary;

        let observed = match previous {
            None if self.awaiting.is_some() || !self.history.is_empty() => {
                return Err(SolverError::MissingOutcome);
            }
            None => None,
            Some((guess, pattern)) => {
                let expected = vocabulary.word_length();
                if pattern.len() != expected {
                    return Err(SolverError::OutcomeLength {
                        expected,
                        found: pattern.len(),
                    });
                }
                let played = vocabulary
                    .get(guess.text())
                    .ok_or_else(|| SolverError::UnknownGuess(guess.text().to_string()))?;
                Some((played, pattern))
            }
        };

        // Work on copies so a failed turn leaves the solver untouched
        let mut constraints = self.constraints.clone();
        let mut strategy = self.strategy.clone();
        let mut history = self.history.clone();

        if let Some((played, pattern)) = observed {
            constraints.update(played, pattern);
            strategy.observe(played, pattern);
            if !history.contains(played) {
                history.push(played.clone());
            }
        }

        let candidates = filter_candidates(vocabulary, &constraints, &history);
        log::debug!(
            "turn {}: {} candidates remain",
            history.len() + 1,
            candidates.len()
        );

        let guess = match self.opening {
            Some(opening) if history.is_empty() => Some(opening),
            _ => {
                let turn = Turn {
                    vocabulary,
                    candidates: &candidates,
                    history: &history,
                    rule: self.rule,
                };
                strategy.select_guess(&turn, &mut self.rng)
            }
        };
        let guess = guess.ok_or(SolverError::NoCandidates)?;
        log::debug!("turn {}: guessing {guess}", history.len() + 1);

        self.constraints = constraints;
        self.strategy = strategy;
        self.history = history;
        self.candidates = candidates;
        self.awaiting = Some(guess);
        Ok(guess)
    }

    /// Forget the current game, keeping strategy configuration and RNG
    pub fn reset(&mut self) {
        self.constraints.reset();
        self.strategy.reset();
        self.history.clear();
        self.candidates = self.vocabulary.iter().collect();
        self.awaiting = None;
    }

    /// Candidates considered for the most recent guess
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Guesses whose outcomes have been reported, in play order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn rule(&self) -> FeedbackRule {
        self.rule
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }
}
