//! Entropy-maximizing strategy
//!
//! Guesses the candidate whose simulated feedback splits the remaining
//! candidates most evenly.

use super::selector::{select_best_guess, select_best_guess_until};
use crate::core::Word;
use crate::solver::strategy::{Strategy, Turn};
use rand::Rng;
use std::time::{Duration, Instant};

/// Pure entropy maximization strategy
///
/// Scores every candidate against every other candidate, so cost grows with
/// the square of the candidate count. An optional time budget caps a single
/// selection; candidates not reached before it runs out are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy {
    /// Upper bound on time spent scoring one turn
    pub time_budget: Option<Duration>,
}

impl EntropyStrategy {
    /// Entropy strategy that gives up scoring after `budget`
    #[must_use]
    pub const fn with_time_budget(budget: Duration) -> Self {
        Self {
            time_budget: Some(budget),
        }
    }
}

impl Strategy for EntropyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &mut self,
        turn: &Turn<'a, '_>,
        _rng: &mut R,
    ) -> Option<&'a Word> {
        let candidates = turn.candidates;

        // A lone candidate carries no information; just guess it
        if candidates.len() <= 1 {
            return candidates.first().copied();
        }

        match self.time_budget {
            None => select_best_guess(candidates, candidates, turn.rule).map(|(word, _)| word),
            Some(budget) => {
                let selection =
                    select_best_guess_until(candidates, candidates, turn.rule, Instant::now() + budget)?;
                if selection.scored < candidates.len() {
                    log::warn!(
                        "entropy scan hit its {budget:?} budget after {}/{} candidates",
                        selection.scored,
                        candidates.len()
                    );
                }
                Some(selection.word)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackRule, Vocabulary};
    use crate::solver::entropy::calculate_entropy;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn select(strategy: &mut EntropyStrategy, vocabulary: &Vocabulary, picks: &[&str]) -> Option<String> {
        let candidates: Vec<&Word> = vocabulary
            .iter()
            .filter(|w| picks.contains(&w.text()))
            .collect();
        let history = words_from_slice(&["zzzzz"]);
        let turn = Turn {
            vocabulary,
            candidates: &candidates,
            history: &history,
            rule: FeedbackRule::Simple,
        };
        let mut rng = StdRng::seed_from_u64(0);
        strategy.select_guess(&turn, &mut rng).map(|w| w.text().to_string())
    }

    #[test]
    fn singleton_is_selected() {
        let vocabulary = Vocabulary::new(words_from_slice(&["crane", "slate", "trace"])).unwrap();
        let mut strategy = EntropyStrategy::default();

        assert_eq!(select(&mut strategy, &vocabulary, &["slate"]).as_deref(), Some("slate"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let vocabulary = Vocabulary::new(words_from_slice(&["crane"])).unwrap();
        let mut strategy = EntropyStrategy::default();

        assert!(select(&mut strategy, &vocabulary, &[]).is_none());
    }

    #[test]
    fn picks_the_most_informative_candidate() {
        let vocabulary =
            Vocabulary::new(words_from_slice(&["crate", "grate", "irate", "trace"])).unwrap();
        let mut strategy = EntropyStrategy::default();
        let picks = ["crate", "grate", "irate", "trace"];

        let guess = select(&mut strategy, &vocabulary, &picks).unwrap();
        let candidates: Vec<&Word> = vocabulary.iter().collect();
        let best = candidates
            .iter()
            .map(|w| calculate_entropy(w, &candidates, FeedbackRule::Simple))
            .fold(f64::MIN, f64::max);
        let chosen = vocabulary.get(&guess).unwrap();

        assert!(
            (calculate_entropy(chosen, &candidates, FeedbackRule::Simple) - best)
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn budgeted_strategy_still_answers() {
        let vocabulary =
            Vocabulary::new(words_from_slice(&["crate", "grate", "irate", "trace"])).unwrap();
        let mut strategy = EntropyStrategy::with_time_budget(Duration::ZERO);
        let picks = ["crate", "grate", "irate", "trace"];

        // With no time at all only the first candidate gets scored
        assert_eq!(select(&mut strategy, &vocabulary, &picks).as_deref(), Some("crate"));
    }
}
