//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, known_positions, percent};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::game::GameStatus;
use colored::Colorize;

/// Print the result of playing one game
pub fn print_solve_result(result: &SolveResult, strategy: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.target.to_uppercase().bright_yellow().bold(),
        strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!("  Candidates: {}", step.candidates);
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);
        }
    }

    if verbose {
        let absent: String = result
            .knowledge
            .absent_letters()
            .into_iter()
            .map(char::from)
            .collect();
        let present: String = result
            .knowledge
            .present_letters()
            .into_iter()
            .map(char::from)
            .collect();
        println!(
            "\n  Known letters: {}",
            known_positions(result.knowledge.positions()).green()
        );
        println!("  Known present: {}", present.green());
        println!("  Known absent:  {}", absent.bright_black());
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        ),
        _ if result.stalled => println!(
            "{}",
            format!(
                "❌ No viable guess left after {} guesses ({} unused)",
                result.guesses.len(),
                result.unused_guesses
            )
            .red()
            .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.worst_case);
    println!("   Frequency:   {}", result.frequency_score);
    println!(
        "   Rank:        #{} of {}",
        result.rank, result.total_candidates
    );
}

/// Print a comparison of benchmark results
pub fn print_benchmark_results(results: &[BenchmarkResult], max_guesses: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!(
            "\n📊 {} ({} games)",
            result.strategy.bright_cyan().bold(),
            result.games
        );
        println!(
            "   Win rate:          {}",
            percent(result.win_rate()).bright_yellow().bold()
        );
        println!("   Letter accuracy:   {}", percent(result.letter_accuracy()));
        println!(
            "   Perfect letters:   {}",
            percent(result.perfect_letter_accuracy())
        );
        println!("   Average guesses:   {:.2}", result.average_guesses());
        match result.average_guesses_to_win() {
            Some(avg) => println!("   Guesses to win:    {avg:.2}"),
            None => println!("   Guesses to win:    {}", "n/a".bright_black()),
        }
        println!(
            "   Time per game:     {:.2}ms",
            result.average_time().as_secs_f64() * 1000.0
        );
        if result.stalled > 0 {
            println!(
                "   No viable guess:   {}",
                result.stalled.to_string().yellow()
            );
        }

        for guess_count in 1..=max_guesses {
            if let Some(&count) = result.distribution.get(&guess_count) {
                let pct = (count as f64 / result.games as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░"
                        .repeat(40_usize.saturating_sub(bar_width))
                        .bright_black()
                );
                println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
            }
        }
    }
}
