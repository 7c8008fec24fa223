//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod check;
pub mod filter;
pub mod play;
pub mod solve;

pub use analyze::{
    best_opening, evaluate_sequence, expected_turns, failure_probability, top_pair,
};
pub use benchmark::{BenchmarkResult, hidden_words, run_benchmark};
pub use check::{FIXTURES, Mismatch, run_check, score_pair};
pub use filter::{FilterMatch, FilterQuery, InvalidRow, run_filter};
pub use play::run_interactive;
pub use solve::{play_adversary, solve_word};

use crate::dictionary::{Dictionary, Entry};
use crate::error::SolveError;
use indicatif::{ProgressBar, ProgressStyle};

/// Look up command-line words in the table, preserving order
///
/// # Errors
///
/// Returns `SolveError::UnknownWord` for the first word not in the table.
pub fn resolve<'a, S: AsRef<str>>(
    dict: &'a Dictionary,
    words: &[S],
) -> Result<Vec<&'a Entry>, SolveError> {
    words
        .iter()
        .map(|w| {
            let text = w.as_ref().to_ascii_lowercase();
            dict.find(&text).ok_or(SolveError::UnknownWord(text))
        })
        .collect()
}

/// Progress bar for long analyses, drawn on stderr
#[must_use]
pub fn progress_bar(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(0).with_message(message);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
