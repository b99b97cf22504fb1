//! Benchmark command
//!
//! Plays the same seeded targets with several strategies and compares them.

use super::solve::{SolveResult, solve_word};
use crate::core::{Vocabulary, Word};
use crate::game::{DEFAULT_MAX_GUESSES, Game, draw_targets};
use crate::solver::{Solver, SolverConfig, StrategyType};
use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of games per strategy
    pub trials: usize,
    pub max_guesses: usize,
    /// Seed for target selection and every solver's RNG
    pub seed: u64,
    /// Strategy names to compare
    pub strategies: Vec<String>,
    pub solver: SolverConfig,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: 0,
            strategies: StrategyType::NAMES.iter().map(ToString::to_string).collect(),
            solver: SolverConfig::default(),
            show_progress: false,
        }
    }
}

/// Aggregated results for one strategy
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub games: usize,
    pub wins: usize,
    /// Games that ended because no viable guess remained
    pub stalled: usize,
    /// Guesses over all games, counting a loss as the full allowance
    pub total_guesses: usize,
    /// Guesses over won games only
    pub winning_guesses: usize,
    pub letter_accuracy_sum: f64,
    pub position_accuracy_sum: f64,
    pub total_time: Duration,
    /// Won games keyed by guesses used
    pub distribution: BTreeMap<usize, usize>,
}

impl BenchmarkResult {
    fn new(strategy: &str) -> Self {
        Self {
            strategy: strategy.to_string(),
            games: 0,
            wins: 0,
            stalled: 0,
            total_guesses: 0,
            winning_guesses: 0,
            letter_accuracy_sum: 0.0,
            position_accuracy_sum: 0.0,
            total_time: Duration::ZERO,
            distribution: BTreeMap::new(),
        }
    }

    fn record(&mut self, game: &SolveResult, max_guesses: usize) {
        self.games += 1;
        self.total_time += game.duration;
        self.letter_accuracy_sum += game.letter_accuracy();
        self.position_accuracy_sum += game.position_accuracy();
        if game.stalled {
            self.stalled += 1;
        }

        if game.won() {
            let used = game.guesses.len();
            self.wins += 1;
            self.total_guesses += used;
            self.winning_guesses += used;
            *self.distribution.entry(used).or_insert(0) += 1;
        } else {
            self.total_guesses += max_guesses;
        }
    }

    fn ratio(value: f64, games: usize) -> f64 {
        if games == 0 { 0.0 } else { value / games as f64 }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        Self::ratio(self.wins as f64, self.games)
    }

    #[must_use]
    pub fn letter_accuracy(&self) -> f64 {
        Self::ratio(self.letter_accuracy_sum, self.games)
    }

    #[must_use]
    pub fn perfect_letter_accuracy(&self) -> f64 {
        Self::ratio(self.position_accuracy_sum, self.games)
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        Self::ratio(self.total_guesses as f64, self.games)
    }

    /// Average guesses over won games, `None` without a win
    #[must_use]
    pub fn average_guesses_to_win(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.winning_guesses as f64 / self.wins as f64)
    }

    #[must_use]
    pub fn average_time(&self) -> Duration {
        match u32::try_from(self.games) {
            Ok(games) if games > 0 => self.total_time / games,
            _ => Duration::ZERO,
        }
    }
}

/// Seed for the solver playing trial `trial`
fn trial_seed(seed: u64, trial: usize) -> u64 {
    seed.wrapping_add(trial as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Play one game with a freshly built solver
fn play_trial(
    vocabulary: &Vocabulary,
    target: &Word,
    strategy: StrategyType,
    config: &BenchmarkConfig,
    trial: usize,
) -> Result<SolveResult> {
    let rng = StdRng::seed_from_u64(trial_seed(config.seed, trial));
    let mut solver = Solver::new(strategy, vocabulary, rng).with_rule(config.solver.rule);
    if let Some(opening) = &config.solver.opening {
        solver = solver.with_opening(opening)?;
    }
    let mut game = Game::new(vocabulary, target.text(), config.max_guesses, config.solver.rule)?;
    solve_word(&mut solver, &mut game)
}

/// Compare strategies over `config.trials` shared targets
///
/// Targets are drawn once from `config.seed`; every strategy plays the same
/// targets. Trials run in parallel, each with its own solver and RNG, so the
/// results do not depend on scheduling.
///
/// # Errors
///
/// Returns an error for an unknown strategy name or an opening word outside
/// the vocabulary.
pub fn run_benchmark(vocabulary: &Vocabulary, config: &BenchmarkConfig) -> Result<Vec<BenchmarkResult>> {
    let strategies = config
        .strategies
        .iter()
        .map(|name| {
            config
                .solver
                .strategy(name)
                .ok_or_else(|| anyhow!("Unknown strategy '{name}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let targets = draw_targets(vocabulary, config.trials, &mut rng);

    let pb = if config.show_progress {
        let pb = ProgressBar::new((targets.len() * strategies.len()) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let name = strategy.name();
        pb.set_message(name);
        log::info!("benchmarking {name} over {} games", targets.len());

        let start = Instant::now();
        let games = targets
            .par_iter()
            .enumerate()
            .map(|(trial, &target)| {
                let game = play_trial(vocabulary, target, strategy.clone(), config, trial);
                pb.inc(1);
                game
            })
            .collect::<Result<Vec<_>>>()?;

        let mut result = BenchmarkResult::new(name);
        for game in &games {
            result.record(game, config.max_guesses);
        }
        log::info!(
            "{name}: {:.1}% won in {:.2?}",
            result.win_rate() * 100.0,
            start.elapsed()
        );
        results.push(result);
    }

    pb.finish_with_message("Complete!");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&WORDS[..80])).unwrap()
    }

    fn config(trials: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            trials,
            seed: 3,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs_every_strategy() {
        let vocabulary = vocabulary();
        let results = run_benchmark(&vocabulary, &config(12)).unwrap();

        assert_eq!(results.len(), StrategyType::NAMES.len());
        for result in &results {
            assert_eq!(result.games, 12);
            assert!(result.win_rate() >= 0.0 && result.win_rate() <= 1.0);
            assert!(result.average_guesses() >= 1.0);
            assert!(result.average_guesses() <= 6.0);
            assert!(result.letter_accuracy() <= 1.0);
            assert!(result.perfect_letter_accuracy() <= 1.0);
        }
    }

    #[test]
    fn distribution_sums_to_wins() {
        let vocabulary = vocabulary();
        let results = run_benchmark(&vocabulary, &config(10)).unwrap();

        for result in &results {
            let sum: usize = result.distribution.values().sum();
            assert_eq!(sum, result.wins);
            for &used in result.distribution.keys() {
                assert!((1..=6).contains(&used));
            }
            if let Some(avg) = result.average_guesses_to_win() {
                assert!(avg <= result.average_guesses() + 1e-12);
            }
        }
    }

    #[test]
    fn same_seed_same_results() {
        let vocabulary = vocabulary();
        let mut cfg = config(8);
        cfg.strategies = vec!["random".to_string(), "genetic".to_string()];

        let first = run_benchmark(&vocabulary, &cfg).unwrap();
        let second = run_benchmark(&vocabulary, &cfg).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.wins, b.wins);
            assert_eq!(a.total_guesses, b.total_guesses);
            assert_eq!(a.distribution, b.distribution);
        }
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let vocabulary = vocabulary();
        let mut cfg = config(1);
        cfg.strategies = vec!["oracle".to_string()];

        assert!(run_benchmark(&vocabulary, &cfg).is_err());
    }

    #[test]
    fn empty_benchmark() {
        let vocabulary = vocabulary();
        let results = run_benchmark(&vocabulary, &config(0)).unwrap();

        for result in &results {
            assert_eq!(result.games, 0);
            assert!(result.win_rate().abs() < f64::EPSILON);
            assert!(result.average_guesses_to_win().is_none());
            assert_eq!(result.average_time(), Duration::ZERO);
        }
    }
}
