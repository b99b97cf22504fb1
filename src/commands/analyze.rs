//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::{FeedbackRule, Vocabulary, Word};
use crate::solver::entropy::calculate_metrics;
use crate::solver::frequency::{frequency_score, letter_counts};
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    /// Size of the largest group of words sharing one outcome
    pub worst_case: usize,
    /// Letter-frequency score over the whole vocabulary
    pub frequency_score: u32,
    /// 1-based rank of the word by entropy within the vocabulary
    pub rank: usize,
    pub total_candidates: usize,
}

/// Analyze a word as an opening guess against the whole vocabulary
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or has the wrong length
/// - The word is not in the vocabulary
pub fn analyze_word(word: &str, vocabulary: &Vocabulary, rule: FeedbackRule) -> Result<AnalysisResult> {
    let parsed = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;
    if parsed.len() != vocabulary.word_length() {
        bail!(
            "Word '{word}' has {} letters, the word list uses {}",
            parsed.len(),
            vocabulary.word_length()
        );
    }
    let Some(target) = vocabulary.get(parsed.text()) else {
        bail!("Word '{word}' not in word list");
    };

    let candidates: Vec<&Word> = vocabulary.iter().collect();
    let metrics = calculate_metrics(target, &candidates, rule);
    let counts = letter_counts(&candidates);

    // Words strictly more informative than this one
    let better = candidates
        .iter()
        .filter(|&&other| {
            other != target && calculate_metrics(other, &candidates, rule).entropy > metrics.entropy
        })
        .count();

    Ok(AnalysisResult {
        word: target.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        frequency_score: frequency_score(target, &counts),
        rank: better + 1,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&WORDS[..100])).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let vocabulary = vocabulary();
        let word = vocabulary[0].text().to_string();

        let result = analyze_word(&word, &vocabulary, FeedbackRule::Simple).unwrap();

        assert_eq!(result.word, word);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 100);
        assert!(result.rank >= 1 && result.rank <= 100);
        assert!(result.worst_case >= 1);
    }

    #[test]
    fn analyze_invalid_word() {
        let vocabulary = vocabulary();

        assert!(analyze_word("zzzzz", &vocabulary, FeedbackRule::Simple).is_err());
        assert!(analyze_word("abc", &vocabulary, FeedbackRule::Simple).is_err());
        assert!(analyze_word("ab!de", &vocabulary, FeedbackRule::Simple).is_err());
    }

    #[test]
    fn entropy_properties() {
        let vocabulary = vocabulary();
        let word = vocabulary[10].text().to_string();

        let result = analyze_word(&word, &vocabulary, FeedbackRule::Standard).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (vocabulary.len() as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= vocabulary.len() as f64);
    }

    #[test]
    fn best_word_ranks_first() {
        let vocabulary =
            Vocabulary::new(words_from_slice(&["crate", "grate", "irate", "trace"])).unwrap();
        let ranks: Vec<usize> = ["crate", "grate", "irate", "trace"]
            .iter()
            .map(|w| analyze_word(w, &vocabulary, FeedbackRule::Simple).unwrap().rank)
            .collect();

        assert!(ranks.contains(&1));
    }
}
