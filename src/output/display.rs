//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_row};
use crate::commands::{BenchmarkResult, FilterMatch, Mismatch};
use crate::core::{PackedPattern, Pattern, Word};
use crate::game::{GameResult, Step};
use crate::solver::{Metric, PairScore, ScoredGuess};
use colored::Colorize;

fn print_step(step: &Step<'_>, debug: bool) {
    if debug && !step.shortlist.is_empty() {
        let words: Vec<&str> = step.shortlist.iter().map(|e| e.text()).collect();
        println!("Remaining: {} [{}]", step.candidates_before, words.join(" "));
    } else {
        println!("Remaining: {}", step.candidates_before);
    }
    println!(
        "Guess {}: {}",
        step.turn,
        feedback_row(step.guess.text(), step.pattern.into())
    );
}

/// Print a simulated or adversarial game turn by turn
pub fn print_game(result: &GameResult<'_>, debug: bool) {
    for step in &result.steps {
        print_step(step, debug);
    }
    print_outcome(result);
}

/// Print how a game ended
pub fn print_outcome(result: &GameResult<'_>) {
    println!();
    if result.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", result.turns()).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved in {} guesses", result.turns()).red().bold()
        );
    }
}

/// Print a single analysis value
pub fn print_value(label: &str, value: f64) {
    println!("{label}: {}", format!("{value:.6}").bright_yellow().bold());
}

/// Print the best opening pair next to the best single opening
pub fn print_pair(pair: &PairScore<'_>, single: &ScoredGuess<'_>, metric: Metric) {
    println!(
        "Best pair: {}/{}  {metric} {}",
        pair.first.text().to_uppercase().bright_green().bold(),
        pair.second.text().to_uppercase().bright_green().bold(),
        format!("{:.6}", pair.value).bright_yellow()
    );
    println!(
        "Best single: {}  {metric} {:.6}",
        single.entry.text().to_uppercase(),
        single.value
    );
}

/// Print filter matches, most plausible first
pub fn print_filter_matches(matches: &[FilterMatch<'_>]) {
    for m in matches {
        println!("{:.0} {}", m.score, m.entry.text());
    }
    if matches.is_empty() {
        println!("{}", "No word fits those rows".red());
    }
}

/// Print both encodings of one feedback pattern
pub fn print_score(guess: &Word, pattern: Pattern, packed: PackedPattern) {
    println!("{}  {}", feedback_row(guess.text(), packed), pattern.to_emoji());
    println!("   packed:  0x{packed:05x}");
    println!("   compact: {}", pattern.value());
    println!("   symbols: {pattern}");
}

/// Print self-check mismatches
pub fn print_check(mismatches: &[Mismatch], total: usize) {
    for m in mismatches {
        println!(
            "{} {}/{}: expected 0x{:05x}, got 0x{:05x}",
            "FAIL".red().bold(),
            m.guess,
            m.hidden,
            m.expected,
            m.actual
        );
    }
    let passed = total - mismatches.len();
    let summary = format!("{passed}/{total} scoring fixtures passed");
    if mismatches.is_empty() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:      {}", result.total_words);
    println!("   Solved:            {}", result.solved.to_string().green());
    println!("   Failed:            {}", result.failed.to_string().red());
    println!(
        "   Average guesses:   {}",
        format!("{:.3}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Weighted average:  {}",
        format!("{:.3}", result.weighted_average_turns).bright_yellow()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    if result.solved > 0 {
        println!("\n{}", "Distribution:".bright_cyan().bold());
        for (&turns, &count) in &result.distribution {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {turns}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n{}", "Unsolved:".yellow().bold());
        for word in result.failures.iter().take(20) {
            println!("   {}", word.to_uppercase().yellow());
        }
    }
}
