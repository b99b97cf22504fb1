//! Candidate filtering and guess selection
//!
//! Constraint tracking, the candidate filter, the four guessing strategies
//! and the solver that drives them turn by turn.

mod config;
mod constraints;
mod engine;
pub mod entropy;
mod filter;
pub mod frequency;
pub mod genetic;
mod random;
pub mod strategy;

pub use config::SolverConfig;
pub use constraints::Constraints;
pub use engine::{Solver, SolverError};
pub use entropy::EntropyStrategy;
pub use filter::filter_candidates;
pub use frequency::FrequencyStrategy;
pub use genetic::GeneticStrategy;
pub use random::RandomStrategy;
pub use strategy::{Strategy, StrategyType, Turn};
