//! Letter-frequency guessing
//!
//! Counts how many candidates contain each letter and guesses the candidate
//! whose distinct letters are the most common overall. The opening guess is
//! a random vocabulary word.

use super::RandomStrategy;
use super::strategy::{Strategy, Turn};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Number of candidates containing each letter, indexed by `letter - b'a'`
pub type LetterCounts = [u32; 26];

/// Count, for every letter, how many candidates contain it
///
/// A letter repeated within one word counts once for that word.
#[must_use]
pub fn letter_counts(candidates: &[&Word]) -> LetterCounts {
    let mut counts = [0u32; 26];
    for word in candidates {
        for letter in word.distinct_letters() {
            counts[usize::from(letter - b'a')] += 1;
        }
    }
    counts
}

/// Sum of the counts of a word's distinct letters
#[must_use]
pub fn frequency_score(word: &Word, counts: &LetterCounts) -> u32 {
    word.distinct_letters()
        .map(|letter| counts[usize::from(letter - b'a')])
        .sum()
}

/// Frequency-greedy strategy
///
/// Keeps the letter tallies of the last candidate set it scored.
#[derive(Debug, Clone, Default)]
pub struct FrequencyStrategy {
    counts: LetterCounts,
}

impl FrequencyStrategy {
    /// Letter tallies from the most recent selection
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }
}

/// Candidate with the strictly highest score, first one winning ties
fn best_by_frequency<'a>(candidates: &[&'a Word], counts: &LetterCounts) -> Option<&'a Word> {
    let mut best: Option<(&'a Word, u32)> = None;
    for &candidate in candidates {
        let score = frequency_score(candidate, counts);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(word, _)| word)
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &mut self,
        turn: &Turn<'a, '_>,
        rng: &mut R,
    ) -> Option<&'a Word> {
        if turn.is_opening() {
            return turn.vocabulary.words().choose(rng);
        }

        self.counts = letter_counts(turn.candidates);

        if turn.candidates.is_empty() {
            return RandomStrategy::pick(turn.candidates, rng);
        }

        best_by_frequency(turn.candidates, &self.counts)
    }

    fn reset(&mut self) {
        self.counts = [0; 26];
    }
}
