//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i` to a `u64` code. Together with the
//! word length this gives a compact, hashable value for pattern tallies.

use super::Word;
use super::word::MAX_WORD_LEN;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter matches the target at this position
    Correct,
}

impl Feedback {
    const fn digit(self) -> u64 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackRule {
    /// A letter is Present whenever it appears anywhere in the target
    ///
    /// Repeated guess letters can all be marked even if the target holds the
    /// letter once.
    #[default]
    Simple,
    /// Marks are capped by each letter's multiplicity in the target
    ///
    /// Correct positions claim letters first, then Present marks are handed out
    /// left to right from what remains (standard Wordle rules).
    Standard,
}

impl FeedbackRule {
    /// Parse a rule from its CLI name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(Self::Simple),
            "standard" | "strict" => Some(Self::Standard),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the per-letter feedback as a base-3 code plus the word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u64,
    len: u8,
}

impl Pattern {
    /// Build a pattern from per-position feedback
    ///
    /// # Panics
    /// Panics if `feedback` is empty or longer than [`MAX_WORD_LEN`]
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        assert!(
            !feedback.is_empty() && feedback.len() <= MAX_WORD_LEN,
            "pattern length must be 1..={MAX_WORD_LEN}"
        );

        let mut code = 0u64;
        let mut multiplier = 1u64;
        for f in feedback {
            code += f.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            code,
            len: feedback.len() as u8,
        }
    }

    /// All-correct pattern for a word of length `len`
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_feedback(&vec![Feedback::Correct; len])
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false: patterns cover at least one letter
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Iterate over per-position feedback
    pub fn feedback(self) -> impl Iterator<Item = Feedback> {
        let mut val = self.code;
        (0..self.len()).map(move |_| {
            let f = Feedback::from_digit(val % 3);
            val /= 3;
            f
        })
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.feedback().all(|f| f == Feedback::Correct)
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// # Panics
    /// Panics if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, FeedbackRule, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer, FeedbackRule::Simple);
    ///
    /// let feedback: Vec<Feedback> = pattern.feedback().collect();
    /// assert_eq!(
    ///     feedback,
    ///     [
    ///         Feedback::Present,
    ///         Feedback::Present,
    ///         Feedback::Correct,
    ///         Feedback::Absent,
    ///         Feedback::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word, rule: FeedbackRule) -> Self {
        assert_eq!(
            guess.len(),
            answer.len(),
            "guess and answer must have the same length"
        );

        let feedback = match rule {
            FeedbackRule::Simple => simple_feedback(guess, answer),
            FeedbackRule::Standard => standard_feedback(guess, answer),
        };

        Self::from_feedback(&feedback)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'B'/'b'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let feedback: Option<Vec<Feedback>> = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Feedback::Correct),
                'Y' | 'y' | '🟨' => Some(Feedback::Present),
                '-' | '_' | 'B' | 'b' | '⬜' => Some(Feedback::Absent),
                _ => None,
            })
            .collect();

        feedback
            .filter(|f| !f.is_empty() && f.len() <= MAX_WORD_LEN)
            .map(|f| Self::from_feedback(&f))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .map(|f| match f {
                Feedback::Correct => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.feedback() {
            let ch = match feedback {
                Feedback::Correct => 'G',
                Feedback::Present => 'Y',
                Feedback::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

fn simple_feedback(guess: &Word, answer: &Word) -> Vec<Feedback> {
    guess
        .chars()
        .iter()
        .zip(answer.chars())
        .map(|(&g, &a)| {
            if g == a {
                Feedback::Correct
            } else if answer.has_letter(g) {
                Feedback::Present
            } else {
                Feedback::Absent
            }
        })
        .collect()
}

fn standard_feedback(guess: &Word, answer: &Word) -> Vec<Feedback> {
    let mut result = vec![Feedback::Absent; guess.len()];
    let mut available = [0u8; 26];

    // First pass: greens, and pool the unmatched answer letters
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = Feedback::Correct;
        } else {
            available[usize::from(a - b'a')] += 1;
        }
    }

    // Second pass: yellows from the remaining pool
    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == Feedback::Correct {
            continue;
        }
        let slot = &mut available[usize::from(g - b'a')];
        if *slot > 0 {
            result[i] = Feedback::Present;
            *slot -= 1;
        }
    }

    result
}
