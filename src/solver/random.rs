//! Uniform random guessing
//!
//! Mimics a casual human player: any word still consistent with the feedback
//! is as good as any other.

use super::strategy::{Strategy, Turn};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Random strategy
///
/// Opens with a uniformly random vocabulary word, then picks uniformly among
/// the remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Uniform choice among candidates, `None` when there are none
    pub fn pick<'a, R: Rng + ?Sized>(candidates: &[&'a Word], rng: &mut R) -> Option<&'a Word> {
        candidates.choose(rng).copied()
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &mut self,
        turn: &Turn<'a, '_>,
        rng: &mut R,
    ) -> Option<&'a Word> {
        if turn.is_opening() {
            return turn.vocabulary.words().choose(rng);
        }
        Self::pick(turn.candidates, rng)
    }
}
