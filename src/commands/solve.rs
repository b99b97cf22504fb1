//! Game playing command
//!
//! Lets a solver play one game to completion and records every step.

use crate::core::{Pattern, Word};
use crate::game::{Game, GameStatus};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Constraints, Solver, SolverError, Strategy};
use anyhow::Result;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of playing one game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub status: GameStatus,
    pub guesses: Vec<GuessStep>,
    /// The solver ran out of candidates before the game ended
    pub stalled: bool,
    /// Guesses the game still allowed when it ended
    pub unused_guesses: usize,
    /// Letter knowledge from every turn played
    pub knowledge: Constraints,
    /// Time spent choosing and evaluating guesses
    pub duration: Duration,
}

/// A single guess step in the game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    /// Candidates the guess was chosen from
    pub candidates: usize,
    /// Entropy of the guess over those candidates
    pub entropy: f64,
    pub expected_remaining: f64,
}

impl SolveResult {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Share of the target's length covered by distinct letters known present
    ///
    /// A win scores 1.
    #[must_use]
    pub fn letter_accuracy(&self) -> f64 {
        if self.won() {
            return 1.0;
        }
        let known = self.knowledge.present_letters().len() as f64;
        (known / self.knowledge.word_length() as f64).min(1.0)
    }

    /// Share of positions whose letter is known
    ///
    /// A win scores 1.
    #[must_use]
    pub fn position_accuracy(&self) -> f64 {
        if self.won() {
            return 1.0;
        }
        self.knowledge.pinned_count() as f64 / self.knowledge.word_length() as f64
    }
}

/// Play `game` to completion with `solver`
///
/// Running out of candidates ends the game early and is reported through
/// [`SolveResult::stalled`], not as an error.
///
/// # Errors
///
/// Returns an error if the solver and game disagree about the vocabulary.
pub fn solve_word<S: Strategy, R: Rng>(
    solver: &mut Solver<'_, S, R>,
    game: &mut Game<'_>,
) -> Result<SolveResult> {
    let mut duration = Duration::ZERO;
    let mut guesses = Vec::new();
    let mut previous: Option<(&Word, Pattern)> = None;
    let mut stalled = false;

    while game.status() == GameStatus::InProgress {
        let timer = Instant::now();
        let guess = match solver.next_guess(previous) {
            Ok(guess) => guess,
            Err(SolverError::NoCandidates) => {
                duration += timer.elapsed();
                log::debug!("no viable guess left for {}", game.target());
                stalled = true;
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let pattern = game.evaluate(guess)?;
        duration += timer.elapsed();

        // Reporting only, kept off the clock
        let metrics = calculate_metrics(guess, solver.candidates(), solver.rule());

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates: solver.candidates().len(),
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
        });
        previous = Some((guess, pattern));
    }

    let mut knowledge = Constraints::new(game.word_length());
    for (word, pattern) in game.history() {
        knowledge.update(word, *pattern);
    }

    Ok(SolveResult {
        target: game.target().text().to_string(),
        status: game.status(),
        guesses,
        stalled,
        unused_guesses: game.guesses_left(),
        knowledge,
        duration,
    })
}
