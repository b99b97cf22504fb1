//! Constraint tracking
//!
//! Folds `(guess, pattern)` observations into letter knowledge: letters known
//! to be absent, letters known to be present, and letters pinned to a position.

use crate::core::word::letter_bit;
use crate::core::{Feedback, Pattern, Word};

/// Accumulated letter knowledge for one game
///
/// Letter sets are 26-bit masks (bit `i` is letter `b'a' + i`).
///
/// Invariant: no letter is ever in both the present and the absent set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    absent: u32,
    present: u32,
    positions: Vec<Option<u8>>,
}

impl Constraints {
    /// Empty knowledge for words of length `word_length`
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            absent: 0,
            present: 0,
            positions: vec![None; word_length],
        }
    }

    /// Word length these constraints apply to
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    /// Fold one observation into the constraints
    ///
    /// Rules per position:
    /// - Absent: the letter is marked absent unless it is already known present
    /// - Present: the letter is marked present and evicted from absent
    /// - Correct: the position is pinned, the letter is marked present and
    ///   evicted from absent
    ///
    /// # Panics
    /// Panics if the guess or pattern length differs from the constraint length.
    /// Callers validate this beforehand; a mismatch is a programming error.
    pub fn update(&mut self, guess: &Word, pattern: Pattern) {
        assert_eq!(
            guess.len(),
            self.word_length(),
            "guess length does not match constraints"
        );
        assert_eq!(
            pattern.len(),
            self.word_length(),
            "pattern length does not match constraints"
        );

        for (i, (&letter, feedback)) in guess.chars().iter().zip(pattern.feedback()).enumerate() {
            let bit = letter_bit(letter);
            match feedback {
                Feedback::Absent => {
                    // A repeated letter may be absent here but present elsewhere
                    if self.present & bit == 0 {
                        self.absent |= bit;
                    }
                }
                Feedback::Present => {
                    self.present |= bit;
                    self.absent &= !bit;
                }
                Feedback::Correct => {
                    self.positions[i] = Some(letter);
                    self.present |= bit;
                    self.absent &= !bit;
                }
            }
        }
    }

    /// Check whether `word` is consistent with everything observed so far
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        let mask = word.letter_mask();

        word.len() == self.word_length()
            && mask & self.present == self.present
            && mask & self.absent == 0
            && self
                .positions
                .iter()
                .zip(word.chars())
                .all(|(pinned, &c)| pinned.is_none_or(|p| p == c))
    }

    /// Clear all knowledge, keeping the word length
    pub fn reset(&mut self) {
        self.absent = 0;
        self.present = 0;
        self.positions.fill(None);
    }

    /// True until the first observation records anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent == 0 && self.present == 0 && self.positions.iter().all(Option::is_none)
    }

    /// Letters known not to occur, in alphabetical order
    #[must_use]
    pub fn absent_letters(&self) -> Vec<u8> {
        letters_in(self.absent)
    }

    /// Letters known to occur somewhere, in alphabetical order
    #[must_use]
    pub fn present_letters(&self) -> Vec<u8> {
        letters_in(self.present)
    }

    /// Letter pinned at each position, if known
    #[must_use]
    pub fn positions(&self) -> &[Option<u8>] {
        &self.positions
    }

    /// Number of positions whose letter is known
    #[must_use]
    pub fn pinned_count(&self) -> usize {
        self.positions.iter().flatten().count()
    }
}

fn letters_in(mask: u32) -> Vec<u8> {
    (b'a'..=b'z').filter(|&l| mask & letter_bit(l) != 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRule;

    fn observe(constraints: &mut Constraints, guess: &str, pattern: &str) {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::parse(pattern).unwrap();
        constraints.update(&guess, pattern);
    }

    #[test]
    fn starts_empty() {
        let constraints = Constraints::new(5);
        assert!(constraints.is_empty());
        assert_eq!(constraints.word_length(), 5);
        assert!(constraints.allows(&Word::new("crane").unwrap()));
    }

    #[test]
    fn records_each_kind_of_feedback() {
        let mut constraints = Constraints::new(5);
        // crane vs trace: Y Y G - G
        observe(&mut constraints, "crane", "YYG-G");

        assert_eq!(constraints.absent_letters(), b"n".to_vec());
        assert_eq!(constraints.present_letters(), b"acer".to_vec());
        assert_eq!(
            constraints.positions(),
            &[None, None, Some(b'a'), None, Some(b'e')]
        );
        assert_eq!(constraints.pinned_count(), 2);
        assert!(!constraints.is_empty());
    }

    #[test]
    fn absent_does_not_override_present_in_same_guess() {
        let mut constraints = Constraints::new(5);
        // First E present, second E absent (repeated-letter ambiguity)
        observe(&mut constraints, "speed", "--Y--");

        assert!(constraints.present_letters().contains(&b'e'));
        assert!(!constraints.absent_letters().contains(&b'e'));
    }

    #[test]
    fn later_correct_evicts_absent_within_guess() {
        let mut constraints = Constraints::new(5);
        // Absent E at position 1 comes before the correct E at position 2
        observe(&mut constraints, "geese", "--G--");

        assert!(!constraints.absent_letters().contains(&b'e'));
        assert!(constraints.present_letters().contains(&b'e'));
    }

    #[test]
    fn correct_in_later_guess_evicts_absent() {
        let mut constraints = Constraints::new(5);
        observe(&mut constraints, "sooty", "-----");
        assert!(constraints.absent_letters().contains(&b'o'));

        observe(&mut constraints, "crown", "--G--");
        assert!(!constraints.absent_letters().contains(&b'o'));
        assert_eq!(constraints.positions()[2], Some(b'o'));
    }

    #[test]
    fn present_and_absent_never_overlap() {
        let mut constraints = Constraints::new(5);
        observe(&mut constraints, "eerie", "-Y--Y");
        observe(&mut constraints, "there", "--GG-");
        observe(&mut constraints, "elect", "G-Y--");

        let present = constraints.present_letters();
        assert!(constraints.absent_letters().iter().all(|l| !present.contains(l)));
    }

    #[test]
    fn allows_checks_every_rule() {
        let mut constraints = Constraints::new(5);
        observe(&mut constraints, "crane", "YYG-G");

        assert!(constraints.allows(&Word::new("trace").unwrap()));
        // Missing required letter C
        assert!(!constraints.allows(&Word::new("grape").unwrap()));
        // Contains absent letter N
        assert!(!constraints.allows(&Word::new("rance").unwrap()));
        // Wrong letter at pinned position
        assert!(!constraints.allows(&Word::new("caret").unwrap()));
        // Misplacement is not recorded, so C at position 0 is still allowed
        assert!(constraints.allows(&Word::new("crate").unwrap()));
    }

    #[test]
    fn allows_rejects_other_lengths() {
        let constraints = Constraints::new(5);
        assert!(!constraints.allows(&Word::new("cat").unwrap()));
    }

    #[test]
    fn target_stays_allowed_under_either_rule() {
        let target = Word::new("trace").unwrap();
        for rule in [FeedbackRule::Simple, FeedbackRule::Standard] {
            let mut constraints = Constraints::new(5);
            for guess in ["speed", "crane", "eerie", "react"] {
                let guess = Word::new(guess).unwrap();
                constraints.update(&guess, Pattern::calculate(&guess, &target, rule));
                assert!(constraints.allows(&target), "{rule:?} excluded target after {guess}");
            }
        }
    }

    #[test]
    fn reset_clears_knowledge() {
        let mut constraints = Constraints::new(5);
        observe(&mut constraints, "crane", "YYG-G");
        constraints.reset();

        assert!(constraints.is_empty());
        assert_eq!(constraints, Constraints::new(5));
    }

    #[test]
    #[should_panic(expected = "pattern length")]
    fn update_panics_on_length_mismatch() {
        let mut constraints = Constraints::new(5);
        observe(&mut constraints, "crane", "GG-");
    }
}
