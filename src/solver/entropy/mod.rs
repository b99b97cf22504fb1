//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for feedback pattern distributions
//! and the strategy that maximizes it.

mod calculator;
mod maximizer;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use maximizer::EntropyStrategy;
pub use selector::{BudgetedSelection, select_best_guess, select_best_guess_until};
