//! Candidate filtering
//!
//! Narrows a vocabulary down to the words consistent with the constraints
//! gathered so far and not yet guessed.

use super::Constraints;
use crate::core::Word;

/// Filter `vocabulary` to the words allowed by `constraints` and absent from `history`
///
/// Pure and order-preserving: the result is a sub-sequence of `vocabulary`.
/// An empty result is a valid outcome meaning no viable guess remains.
///
/// # Examples
/// ```
/// use wordle_sim::core::{FeedbackRule, Pattern, Word};
/// use wordle_sim::solver::{Constraints, filter_candidates};
/// use wordle_sim::wordlists::loader::words_from_slice;
///
/// let vocabulary = words_from_slice(&["crane", "slate", "trace", "grape", "brake"]);
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("trace").unwrap();
///
/// let mut constraints = Constraints::new(5);
/// constraints.update(&guess, Pattern::calculate(&guess, &target, FeedbackRule::Simple));
///
/// let candidates = filter_candidates(&vocabulary, &constraints, &[guess]);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "trace");
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    vocabulary: &'a [Word],
    constraints: &Constraints,
    history: &[Word],
) -> Vec<&'a Word> {
    vocabulary
        .iter()
        .filter(|&word| constraints.allows(word) && !history.contains(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackRule, Pattern};
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;

    const SCENARIO: [&str; 5] = ["crane", "slate", "trace", "grape", "brake"];

    const POOL: [&str; 24] = [
        "crane", "slate", "trace", "grape", "brake", "crate", "irate", "grate", "plate", "spine",
        "stone", "shine", "react", "cater", "eerie", "there", "speed", "geese", "robot", "floor",
        "sooty", "crown", "audio", "pious",
    ];

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn scenario_keeps_only_trace() {
        let vocabulary = words_from_slice(&SCENARIO);
        let guess = Word::new("crane").unwrap();
        let target = Word::new("trace").unwrap();
        let pattern = Pattern::calculate(&guess, &target, FeedbackRule::Simple);

        let mut constraints = Constraints::new(5);
        constraints.update(&guess, pattern);

        let candidates = filter_candidates(&vocabulary, &constraints, &[guess]);
        assert_eq!(texts(&candidates), ["trace"]);
    }

    #[test]
    fn empty_constraints_keep_everything_but_history() {
        let vocabulary = words_from_slice(&SCENARIO);
        let constraints = Constraints::new(5);
        let history = words_from_slice(&["slate"]);

        let candidates = filter_candidates(&vocabulary, &constraints, &history);
        assert_eq!(texts(&candidates), ["crane", "trace", "grape", "brake"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let vocabulary = words_from_slice(&SCENARIO);
        let mut constraints = Constraints::new(5);
        let guess = Word::new("zzzzz").unwrap();
        constraints.update(&guess, Pattern::perfect(5));

        assert!(filter_candidates(&vocabulary, &constraints, &[]).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let vocabulary = words_from_slice(&POOL);
        let guess = Word::new("crane").unwrap();
        let target = Word::new("grate").unwrap();
        let mut constraints = Constraints::new(5);
        constraints.update(&guess, Pattern::calculate(&guess, &target, FeedbackRule::Simple));
        let history = vec![guess];

        let first = filter_candidates(&vocabulary, &constraints, &history);
        let second = filter_candidates(&vocabulary, &constraints, &history);
        assert_eq!(first, second);
    }

    fn pool_index() -> impl Strategy<Value = usize> {
        0..POOL.len()
    }

    fn rule() -> impl Strategy<Value = FeedbackRule> {
        prop_oneof![Just(FeedbackRule::Simple), Just(FeedbackRule::Standard)]
    }

    proptest! {
        #[test]
        fn candidates_are_subset_and_exclude_history(
            target in pool_index(),
            guesses in prop::collection::vec(pool_index(), 0..6),
            rule in rule(),
        ) {
            let vocabulary = words_from_slice(&POOL);
            let target = &vocabulary[target];
            let mut constraints = Constraints::new(5);
            let mut history = Vec::new();

            for &g in &guesses {
                let guess = vocabulary[g].clone();
                constraints.update(&guess, Pattern::calculate(&guess, target, rule));
                history.push(guess);
            }

            let candidates = filter_candidates(&vocabulary, &constraints, &history);

            for candidate in &candidates {
                prop_assert!(vocabulary.contains(candidate));
                prop_assert!(!history.contains(candidate));
            }

            // Order preserved: positions in the vocabulary are strictly increasing
            let positions: Vec<usize> = candidates
                .iter()
                .map(|c| vocabulary.iter().position(|w| w == *c).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn candidate_count_never_grows(
            target in pool_index(),
            guesses in prop::collection::vec(pool_index(), 1..6),
            rule in rule(),
        ) {
            let vocabulary = words_from_slice(&POOL);
            let target = &vocabulary[target];
            let mut constraints = Constraints::new(5);
            let mut history = Vec::new();
            let mut previous = filter_candidates(&vocabulary, &constraints, &history).len();

            for &g in &guesses {
                let guess = vocabulary[g].clone();
                constraints.update(&guess, Pattern::calculate(&guess, target, rule));
                history.push(guess);

                let current = filter_candidates(&vocabulary, &constraints, &history).len();
                prop_assert!(current <= previous);
                previous = current;
            }
        }

        #[test]
        fn unguessed_target_survives_filtering(
            target in pool_index(),
            guesses in prop::collection::vec(pool_index(), 0..6),
            rule in rule(),
        ) {
            let vocabulary = words_from_slice(&POOL);
            let target = vocabulary[target].clone();
            let mut constraints = Constraints::new(5);
            let mut history = Vec::new();

            for &g in &guesses {
                let guess = vocabulary[g].clone();
                constraints.update(&guess, Pattern::calculate(&guess, &target, rule));
                history.push(guess);
            }

            let candidates = filter_candidates(&vocabulary, &constraints, &history);
            prop_assert_eq!(
                candidates.contains(&&target),
                !history.contains(&target)
            );
        }
    }
}
