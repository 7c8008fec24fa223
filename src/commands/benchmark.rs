//! Benchmark command
//!
//! Plays a game against every hidden word of a set and aggregates the turns.

use crate::dictionary::{Dictionary, Entry};
use crate::error::SolveError;
use crate::game::{Game, HiddenWord};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Solved games per turn count
    pub distribution: BTreeMap<usize, usize>,
    pub average_turns: f64,
    /// Average over solved games, weighted by each hidden word's probability
    pub weighted_average_turns: f64,
    /// Unsolved hidden words
    pub failures: Vec<String>,
    pub duration: Duration,
}

/// Hidden words to benchmark: the whole table, or `count` of it drawn with `seed`
///
/// Sampled words come back in table order.
#[must_use]
pub fn hidden_words(dict: &Dictionary, count: Option<usize>, seed: u64) -> Vec<&Entry> {
    let all = dict.all();
    match count {
        Some(n) if n < all.len() => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sample: Vec<&Entry> = all.choose_multiple(&mut rng, n).copied().collect();
            sample.sort_unstable_by_key(|e| e.index());
            sample
        }
        _ => all,
    }
}

/// Play one game per hidden word, in parallel
///
/// The game's opening should already be fixed, so the first guess is not
/// recomputed for every word.
///
/// # Errors
///
/// Propagates the first game error.
pub fn run_benchmark(
    game: &Game<'_>,
    hidden: &[&Entry],
    progress: &ProgressBar,
) -> Result<BenchmarkResult, SolveError> {
    let start = Instant::now();
    let dict = game.selector().dictionary();
    progress.set_length(hidden.len() as u64);

    let outcomes: Vec<(&Entry, Option<usize>)> = hidden
        .par_iter()
        .map(|&entry| -> Result<_, SolveError> {
            let result = game.run(&mut HiddenWord::new(entry.word().clone()))?;
            progress.inc(1);
            Ok((entry, result.solved.then(|| result.turns())))
        })
        .collect::<Result<_, SolveError>>()?;
    progress.finish_and_clear();

    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut turns_sum = 0usize;
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for (entry, turns) in &outcomes {
        match turns {
            Some(turns) => {
                *distribution.entry(*turns).or_insert(0) += 1;
                turns_sum += turns;
                weighted_sum += dict.probability(entry) * *turns as f64;
                weight_sum += dict.probability(entry);
            }
            None => failures.push(entry.text().to_string()),
        }
    }

    let solved = outcomes.len() - failures.len();
    let result = BenchmarkResult {
        total_words: outcomes.len(),
        solved,
        failed: failures.len(),
        distribution,
        average_turns: if solved > 0 {
            turns_sum as f64 / solved as f64
        } else {
            0.0
        },
        weighted_average_turns: if weight_sum > 0.0 {
            weighted_sum / weight_sum
        } else {
            0.0
        },
        failures,
        duration: start.elapsed(),
    };
    log::info!(
        "benchmark: {}/{} solved, average {:.3} turns",
        result.solved,
        result.total_words,
        result.average_turns
    );
    Ok(result)
}
