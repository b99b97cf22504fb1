//! Fitness scoring for played guesses

use crate::core::{Feedback, Pattern, Word};

/// Score a guess by its feedback
///
/// Each absent letter costs one point, each present letter earns one and each
/// correct letter earns two.
///
/// # Examples
/// ```
/// use wordle_sim::core::Pattern;
/// use wordle_sim::solver::genetic::fitness;
///
/// assert_eq!(fitness(Pattern::parse("GY---").unwrap()), 0);
/// assert_eq!(fitness(Pattern::parse("GGGGG").unwrap()), 10);
/// ```
#[must_use]
pub fn fitness(pattern: Pattern) -> i32 {
    pattern
        .feedback()
        .map(|feedback| match feedback {
            Feedback::Absent => -1,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        })
        .sum()
}

/// Played guesses ranked by fitness, best first
///
/// Ranking is stable: guesses with equal fitness keep the order they were
/// played in.
#[derive(Debug, Clone, Default)]
pub struct FitnessTable {
    entries: Vec<(Word, i32)>,
}

impl FitnessTable {
    /// Record (or overwrite) the fitness of a guess and re-rank
    pub fn record(&mut self, word: &Word, score: i32) {
        match self.entries.iter_mut().find(|(w, _)| w == word) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((word.clone(), score)),
        }
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
    }

    /// Entries in rank order
    #[must_use]
    pub fn ranked(&self) -> &[(Word, i32)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn fitness_weights() {
        assert_eq!(fitness(Pattern::parse("-----").unwrap()), -5);
        assert_eq!(fitness(Pattern::parse("YY---").unwrap()), -1);
        assert_eq!(fitness(Pattern::parse("YYGYG").unwrap()), 7);
    }

    #[test]
    fn ranks_best_first_and_keeps_play_order_on_ties() {
        let mut table = FitnessTable::default();
        table.record(&word("crane"), 1);
        table.record(&word("slate"), 4);
        table.record(&word("trace"), 1);

        let order: Vec<&str> = table.ranked().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, ["slate", "crane", "trace"]);
    }

    #[test]
    fn recording_twice_overwrites() {
        let mut table = FitnessTable::default();
        table.record(&word("crane"), 1);
        table.record(&word("slate"), 2);
        table.record(&word("crane"), 3);

        assert_eq!(table.len(), 2);
        assert_eq!(table.ranked()[0], (word("crane"), 3));

        table.clear();
        assert!(table.is_empty());
    }
}
