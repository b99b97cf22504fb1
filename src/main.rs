//! Wordle strategy simulator - CLI
//!
//! Plays, benchmarks and analyzes guessing strategies for Wordle-style puzzles.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use wordle_sim::{
    commands::{BenchmarkConfig, analyze_word, run_benchmark, solve_word},
    core::{FeedbackRule, Vocabulary},
    game::{DEFAULT_MAX_GUESSES, Game},
    output::{print_analysis_result, print_benchmark_results, print_solve_result},
    solver::{Solver, SolverConfig, StrategyType},
    wordlists::load_vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Simulate and compare Wordle guessing strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: random, frequency, entropy (default), genetic
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Wordlist: 'default' (embedded five-letter list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Only use words of this length
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Feedback rule: 'simple' (default) or 'standard' (caps repeated letters)
    #[arg(short, long, global = true, default_value = "simple", value_parser = parse_rule)]
    rule: FeedbackRule,

    /// Random seed (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Always open with this word
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,

    /// Genetic strategy: per-letter mutation probability
    #[arg(long, global = true, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Genetic strategy: crossover attempts before guessing at random
    #[arg(long, global = true, default_value_t = 1000)]
    max_attempts: usize,

    /// Entropy strategy: per-turn time budget in milliseconds
    #[arg(long, global = true)]
    time_budget_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and show every guess
    Solve {
        /// The target word (random if omitted)
        target: Option<String>,

        /// Show candidate counts and entropy per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare strategies over the same random targets
    Benchmark {
        /// Number of games per strategy
        #[arg(short = 'n', long, default_value = "100")]
        trials: usize,

        /// Strategies to compare (default: all)
        #[arg(long, value_delimiter = ',')]
        strategies: Vec<String>,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn parse_rule(name: &str) -> Result<FeedbackRule, String> {
    FeedbackRule::from_name(name).ok_or_else(|| format!("unknown rule '{name}' (simple, standard)"))
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            rule: self.rule,
            opening: self.first_word.as_ref().map(|w| w.to_ascii_lowercase()),
            mutation_rate: self.mutation_rate,
            max_attempts: self.max_attempts,
            entropy_budget: self.time_budget_ms.map(Duration::from_millis),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let vocabulary = load_vocabulary(&cli.wordlist, cli.length)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "{} words of length {}, seed {seed}",
        vocabulary.len(),
        vocabulary.word_length()
    );

    match &cli.command {
        Commands::Solve { target, verbose } => {
            run_solve_command(&cli, &vocabulary, target.as_deref(), *verbose, seed)
        }
        Commands::Benchmark { trials, strategies } => {
            run_benchmark_command(&cli, &vocabulary, *trials, strategies, seed)
        }
        Commands::Analyze { word } => run_analyze_command(&cli, &vocabulary, word),
    }
}

fn run_solve_command(
    cli: &Cli,
    vocabulary: &Vocabulary,
    target: Option<&str>,
    verbose: bool,
    seed: u64,
) -> Result<()> {
    let config = cli.solver_config();
    let strategy = config
        .strategy(&cli.strategy)
        .ok_or_else(|| anyhow!("Unknown strategy '{}'", cli.strategy))?;
    let name = strategy.name();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = match target {
        Some(word) => Game::new(vocabulary, word, cli.max_guesses, cli.rule)?,
        None => Game::random(vocabulary, &mut rng)
            .with_max_guesses(cli.max_guesses)
            .with_rule(cli.rule),
    };

    let mut solver = Solver::new(strategy, vocabulary, rng).with_rule(cli.rule);
    if let Some(opening) = &config.opening {
        solver = solver
            .with_opening(opening)
            .context("Invalid first word")?;
    }

    let result = solve_word(&mut solver, &mut game)?;
    print_solve_result(&result, name, verbose);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    vocabulary: &Vocabulary,
    trials: usize,
    strategies: &[String],
    seed: u64,
) -> Result<()> {
    let strategies = if strategies.is_empty() {
        StrategyType::NAMES.iter().map(ToString::to_string).collect()
    } else {
        strategies.to_vec()
    };

    println!(
        "Running benchmark: {} strategies x {trials} games (seed {seed})...",
        strategies.len()
    );

    let config = BenchmarkConfig {
        trials,
        max_guesses: cli.max_guesses,
        seed,
        strategies,
        solver: cli.solver_config(),
        show_progress: true,
    };
    let results = run_benchmark(vocabulary, &config)?;
    print_benchmark_results(&results, config.max_guesses);
    Ok(())
}

fn run_analyze_command(cli: &Cli, vocabulary: &Vocabulary, word: &str) -> Result<()> {
    let result = analyze_word(word, vocabulary, cli.rule)?;
    print_analysis_result(&result);
    Ok(())
}
