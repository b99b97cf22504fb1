//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use colored::{ColoredString, Colorize};

/// Render a guess with each letter colored by its feedback
#[must_use]
pub fn colored_guess(word: &str, pattern: Pattern) -> String {
    word.chars()
        .zip(pattern.feedback())
        .map(|(c, feedback)| colored_letter(c.to_ascii_uppercase(), feedback).to_string())
        .collect()
}

fn colored_letter(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Render pinned letters, `_` for unknown positions
#[must_use]
pub fn known_positions(positions: &[Option<u8>]) -> String {
    positions
        .iter()
        .map(|&slot| slot.map_or('_', char::from))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Format a share in `[0, 1]` as a percentage
#[must_use]
pub fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}
