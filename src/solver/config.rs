//! Solver configuration

use super::StrategyType;
use super::entropy::EntropyStrategy;
use super::genetic::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MUTATION_RATE, GeneticStrategy};
use crate::core::FeedbackRule;
use std::time::Duration;

/// Knobs shared by every solver built for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Rule used to simulate feedback inside strategies
    pub rule: FeedbackRule,
    /// Fixed first guess, if any
    pub opening: Option<String>,
    /// Genetic per-letter mutation probability
    pub mutation_rate: f64,
    /// Genetic crossover/mutation retry cap
    pub max_attempts: usize,
    /// Per-turn time budget for the entropy scan
    pub entropy_budget: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rule: FeedbackRule::Simple,
            opening: None,
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            entropy_budget: None,
        }
    }
}

impl SolverConfig {
    /// Build the named strategy with this configuration applied
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn strategy(&self, name: &str) -> Option<StrategyType> {
        let strategy = match StrategyType::from_name(name)? {
            StrategyType::Entropy(_) => StrategyType::Entropy(EntropyStrategy {
                time_budget: self.entropy_budget,
            }),
            StrategyType::Genetic(_) => StrategyType::Genetic(
                GeneticStrategy::default()
                    .with_mutation_rate(self.mutation_rate)
                    .with_max_attempts(self.max_attempts),
            ),
            other => other,
        };
        Some(strategy)
    }
}
