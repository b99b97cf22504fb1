//! Genetic-search guess selection
//!
//! Ranks played guesses by the feedback they earned, then breeds the next
//! guess from the best-ranked pair: single-point crossover followed by random
//! letter mutation, retried until the offspring is a live candidate.

mod fitness;
mod operators;

pub use fitness::{FitnessTable, fitness};
pub use operators::{crossover, find_parents, mutate};

use super::RandomStrategy;
use super::strategy::{Strategy, Turn};
use crate::core::{Pattern, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Default per-letter mutation probability
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Default cap on crossover/mutation rounds per guess
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Genetic-search strategy
///
/// - Opening: a random vocabulary word
/// - Fewer than two scored guesses: a random candidate
/// - Otherwise: crossover of the first viable ranked pair plus mutation,
///   retried at most `max_attempts` times before falling back to a random
///   candidate
#[derive(Debug, Clone)]
pub struct GeneticStrategy {
    table: FitnessTable,
    mutation_rate: f64,
    max_attempts: usize,
}

impl Default for GeneticStrategy {
    fn default() -> Self {
        Self {
            table: FitnessTable::default(),
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneticStrategy {
    /// Set the per-letter mutation probability, clamped to `[0, 1]`
    #[must_use]
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// Set the crossover/mutation retry cap
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub const fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Played guesses with their fitness, best first
    #[must_use]
    pub fn ranked(&self) -> &[(Word, i32)] {
        self.table.ranked()
    }

    /// Crossover/mutation loop for a known-viable parent pair
    fn breed<'a, R: Rng + ?Sized>(
        &self,
        parents: (usize, usize),
        lookup: &FxHashMap<&[u8], &'a Word>,
        rng: &mut R,
    ) -> Option<&'a Word> {
        let ranked = self.table.ranked();
        let first = ranked[parents.0].0.chars();
        let second = ranked[parents.1].0.chars();

        for _ in 0..self.max_attempts {
            let cut = rng.random_range(0..first.len());
            let mut child = crossover(first, second, cut);
            mutate(&mut child, self.mutation_rate, rng);

            if let Some(&word) = lookup.get(child.as_slice()) {
                return Some(word);
            }
        }
        None
    }
}

impl Strategy for GeneticStrategy {
    fn observe(&mut self, guess: &Word, pattern: Pattern) {
        self.table.record(guess, fitness(pattern));
    }

    fn select_guess<'a, R: Rng + ?Sized>(
        &mut self,
        turn: &Turn<'a, '_>,
        rng: &mut R,
    ) -> Option<&'a Word> {
        if turn.is_opening() {
            return turn.vocabulary.words().choose(rng);
        }
        if turn.candidates.is_empty() {
            return None;
        }
        if self.table.len() < 2 {
            return RandomStrategy::pick(turn.candidates, rng);
        }

        let lookup: FxHashMap<&[u8], &'a Word> = turn
            .candidates
            .iter()
            .map(|&word| (word.chars(), word))
            .collect();

        let Some(parents) = find_parents(self.table.ranked(), |child| lookup.contains_key(child))
        else {
            log::debug!("no parent pair reaches a candidate, guessing at random");
            return RandomStrategy::pick(turn.candidates, rng);
        };

        self.breed(parents, &lookup, rng).or_else(|| {
            log::warn!(
                "genetic search gave up after {} attempts, guessing at random",
                self.max_attempts
            );
            RandomStrategy::pick(turn.candidates, rng)
        })
    }

    fn reset(&mut self) {
        self.table.clear();
    }
}
