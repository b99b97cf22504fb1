//! Wordle strategy simulator
//!
//! Feedback-driven candidate filtering and four competing guess-selection
//! strategies: uniform random, letter frequency, entropy maximization and
//! genetic search.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_sim::core::{FeedbackRule, Pattern, Vocabulary};
//! use wordle_sim::solver::{FrequencyStrategy, Solver};
//! use wordle_sim::wordlists::loader::words_from_slice;
//!
//! let vocabulary =
//!     Vocabulary::new(words_from_slice(&["crane", "slate", "trace", "grape", "brake"])).unwrap();
//! let target = vocabulary.get("trace").unwrap();
//!
//! let mut solver = Solver::new(FrequencyStrategy::default(), &vocabulary, StdRng::seed_from_u64(0));
//! let mut previous = None;
//! loop {
//!     let guess = solver.next_guess(previous).unwrap();
//!     let outcome = Pattern::calculate(guess, target, FeedbackRule::Simple);
//!     if outcome.is_perfect() {
//!         break;
//!     }
//!     previous = Some((guess, outcome));
//! }
//! ```

// Core domain types
pub mod core;

// Candidate filtering and guess selection
pub mod solver;

// Puzzle state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
