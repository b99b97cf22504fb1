//! Guess selection strategies
//!
//! Defines the Strategy trait, the per-turn context strategies see, and the
//! enum used to pick a strategy at construction time.

use super::{EntropyStrategy, FrequencyStrategy, GeneticStrategy, RandomStrategy};
use crate::core::{FeedbackRule, Pattern, Vocabulary, Word};
use rand::Rng;

/// What a strategy sees when choosing a guess
pub struct Turn<'a, 'c> {
    /// Full vocabulary in its original order
    pub vocabulary: &'a Vocabulary,
    /// Vocabulary words consistent with all feedback and not yet guessed
    pub candidates: &'c [&'a Word],
    /// Words guessed so far this game
    pub history: &'c [Word],
    /// Rule used to simulate feedback between words
    pub rule: FeedbackRule,
}

impl Turn<'_, '_> {
    /// True before any guess has been made
    #[inline]
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.history.is_empty()
    }
}

/// A strategy for selecting the next guess
///
/// Strategies may keep private state across turns. The solver calls
/// [`Strategy::observe`] with every piece of feedback before asking for the
/// next guess, and [`Strategy::reset`] when a new game starts.
pub trait Strategy: Clone {
    /// Record feedback for a guess that was played
    fn observe(&mut self, _guess: &Word, _pattern: Pattern) {}

    /// Select the next guess
    ///
    /// Returns `None` when no viable guess exists (empty candidate set).
    fn select_guess<'a, R: Rng + ?Sized>(
        &mut self,
        turn: &Turn<'a, '_>,
        rng: &mut R,
    ) -> Option<&'a Word>;

    /// Forget everything learned during the current game
    fn reset(&mut self) {}
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Uniform random choice among candidates
    Random(RandomStrategy),
    /// Highest aggregate letter frequency
    Frequency(FrequencyStrategy),
    /// Shannon entropy maximization
    Entropy(EntropyStrategy),
    /// Crossover and mutation of previous guesses
    Genetic(GeneticStrategy),
}

impl Strategy for StrategyType {
    fn observe(&mut self, guess: &Word, pattern: Pattern) {
        match self {
            Self::Random(s) => s.observe(guess, pattern),
            Self::Frequency(s) => s.observe(guess, pattern),
            Self::Entropy(s) => s.observe(guess, pattern),
            Self::Genetic(s) => s.observe(guess, pattern),
        }
    }

    fn select_guess<'a, R: Rng + ?Sized>(
        &mut self,
        turn: &Turn<'a, '_>,
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Random(s) => s.select_guess(turn, rng),
            Self::Frequency(s) => s.select_guess(turn, rng),
            Self::Entropy(s) => s.select_guess(turn, rng),
            Self::Genetic(s) => s.select_guess(turn, rng),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Random(s) => s.reset(),
            Self::Frequency(s) => s.reset(),
            Self::Entropy(s) => s.reset(),
            Self::Genetic(s) => s.reset(),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`], in display order
    pub const NAMES: [&'static str; 4] = ["random", "frequency", "entropy", "genetic"];

    /// Create strategy from name string
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" | "human" => Some(Self::Random(RandomStrategy)),
            "frequency" | "freq" => Some(Self::Frequency(FrequencyStrategy::default())),
            "entropy" => Some(Self::Entropy(EntropyStrategy::default())),
            "genetic" => Some(Self::Genetic(GeneticStrategy::default())),
            _ => None,
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Frequency(_) => "frequency",
            Self::Entropy(_) => "entropy",
            Self::Genetic(_) => "genetic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Constraints, filter_candidates};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_name_round_trips() {
        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert!(StrategyType::from_name("oracle").is_none());
    }

    #[test]
    fn every_strategy_picks_the_last_candidate() {
        let vocabulary =
            Vocabulary::new(words_from_slice(&["crane", "slate", "trace", "grape"])).unwrap();
        let history = words_from_slice(&["crane", "slate"]);
        let constraints = Constraints::new(5);
        let all = filter_candidates(&vocabulary, &constraints, &history);
        let candidates: Vec<&Word> = all.into_iter().filter(|w| w.text() == "trace").collect();

        let turn = Turn {
            vocabulary: &vocabulary,
            candidates: &candidates,
            history: &history,
            rule: FeedbackRule::Simple,
        };

        for name in StrategyType::NAMES {
            let mut strategy = StrategyType::from_name(name).unwrap();
            let mut rng = StdRng::seed_from_u64(7);
            let guess = strategy.select_guess(&turn, &mut rng);
            assert_eq!(guess.map(Word::text), Some("trace"), "{name}");
        }
    }

    #[test]
    fn every_strategy_reports_no_candidates() {
        let vocabulary = Vocabulary::new(words_from_slice(&["crane", "slate"])).unwrap();
        let history = words_from_slice(&["crane", "slate"]);
        let turn = Turn {
            vocabulary: &vocabulary,
            candidates: &[],
            history: &history,
            rule: FeedbackRule::Simple,
        };

        for name in StrategyType::NAMES {
            let mut strategy = StrategyType::from_name(name).unwrap();
            let mut rng = StdRng::seed_from_u64(7);
            assert!(strategy.select_guess(&turn, &mut rng).is_none(), "{name}");
        }
    }
}
