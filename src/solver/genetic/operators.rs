//! Crossover, mutation and parent search

use crate::core::Word;
use rand::Rng;

/// Single-point crossover: `first[..cut]` followed by `second[cut..]`
///
/// # Panics
/// Panics if `cut` exceeds either parent's length.
#[must_use]
pub fn crossover(first: &[u8], second: &[u8], cut: usize) -> Vec<u8> {
    let mut child = Vec::with_capacity(second.len());
    child.extend_from_slice(&first[..cut]);
    child.extend_from_slice(&second[cut..]);
    child
}

/// Replace each letter with a uniformly random lowercase letter with probability `rate`
///
/// `rate` must lie in `[0, 1]`.
pub fn mutate<R: Rng + ?Sized>(letters: &mut [u8], rate: f64, rng: &mut R) {
    for letter in letters.iter_mut() {
        if rng.random_bool(rate) {
            *letter = b'a' + rng.random_range(0..26u8);
        }
    }
}

/// First ordered pair of ranked words whose crossover can reach a candidate
///
/// Pairs are tried in rank order: `(0, 1), (0, 2), .., (1, 0), ..`. A pair
/// qualifies when some cut yields a word accepted by `is_candidate` that
/// differs from both parents. Returns the indices of the pair.
pub fn find_parents<F>(ranked: &[(Word, i32)], is_candidate: F) -> Option<(usize, usize)>
where
    F: Fn(&[u8]) -> bool,
{
    for (i, (first, _)) in ranked.iter().enumerate() {
        for (j, (second, _)) in ranked.iter().enumerate() {
            if i == j || first == second || first.len() != second.len() {
                continue;
            }

            let reachable = (0..first.len()).any(|cut| {
                let child = crossover(first.chars(), second.chars(), cut);
                child != first.chars() && child != second.chars() && is_candidate(&child)
            });
            if reachable {
                return Some((i, j));
            }
        }
    }
    None
}
