//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::{FeedbackRule, Word};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;

/// Order scored guesses by entropy, preferring the earlier pool index on ties
fn by_entropy_then_order(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then(b.0.cmp(&a.0))
}

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty. Ties go to the word that appears
/// first in `guess_pool`, regardless of how the parallel scan is scheduled.
///
/// # Examples
/// ```
/// use wordle_sim::core::{FeedbackRule, Word};
/// use wordle_sim::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) =
///     select_best_guess(&guess_refs, &candidate_refs, FeedbackRule::Simple).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    rule: FeedbackRule,
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(i, &guess)| (i, calculate_entropy(guess, candidates, rule)))
        .max_by(by_entropy_then_order)
        .map(|(i, entropy)| (guess_pool[i], entropy))
}

/// Outcome of a scan that may stop early
#[derive(Debug, Clone, Copy)]
pub struct BudgetedSelection<'a> {
    /// Best guess among those scored
    pub word: &'a Word,
    /// Its entropy in bits
    pub entropy: f64,
    /// How many guesses were scored before the deadline
    pub scored: usize,
}

/// Like [`select_best_guess`], but skips guesses not yet scored once `deadline` passes
///
/// At least one guess is always scored, so the result is `None` only for an
/// empty pool.
#[must_use]
pub fn select_best_guess_until<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    rule: FeedbackRule,
    deadline: Instant,
) -> Option<BudgetedSelection<'a>> {
    let first = guess_pool.first()?;

    let (scored, best) = guess_pool
        .par_iter()
        .enumerate()
        .skip(1)
        .filter_map(|(i, &guess)| {
            (Instant::now() < deadline).then(|| (i, calculate_entropy(guess, candidates, rule)))
        })
        .fold(
            || (0usize, None::<(usize, f64)>),
            |(count, best), scored| {
                let best = match best {
                    Some(b) if by_entropy_then_order(&b, &scored).is_ge() => b,
                    _ => scored,
                };
                (count + 1, Some(best))
            },
        )
        .reduce(
            || (0, None),
            |(n1, b1), (n2, b2)| {
                let best = match (b1, b2) {
                    (Some(x), Some(y)) => Some(if by_entropy_then_order(&x, &y).is_ge() {
                        x
                    } else {
                        y
                    }),
                    (x, y) => x.or(y),
                };
                (n1 + n2, best)
            },
        );

    let opening = (0, calculate_entropy(first, candidates, rule));
    let (index, entropy) = match best {
        Some(b) if by_entropy_then_order(&b, &opening).is_gt() => b,
        _ => opening,
    };

    Some(BudgetedSelection {
        word: guess_pool[index],
        entropy,
        scored: scored + 1,
    })
}
