//! Whole-table analyses
//!
//! Expected turns, failure probability, fixed-sequence evaluation and the
//! best opening pair, each computed over the full word table.

use crate::dictionary::Entry;
use crate::error::SolveError;
use crate::solver::{Analyzer, PairScore, ScoredGuess, Selector, best_pair, evaluate};
use indicatif::ProgressBar;

/// Likelihood-weighted expected turns to solve, with `opening` played first
///
/// # Errors
///
/// Propagates analyzer errors.
pub fn expected_turns<'a>(
    selector: Selector<'a>,
    opening: Vec<&'a Entry>,
    progress: ProgressBar,
) -> Result<f64, SolveError> {
    let all = selector.dictionary().all();
    let value = Analyzer::new(selector)
        .with_guesses(opening)
        .with_progress(progress.clone())
        .expected(&all, 1);
    progress.finish_and_clear();
    value
}

/// Probability of not having isolated the hidden word within `turns`
///
/// # Errors
///
/// Propagates analyzer errors.
pub fn failure_probability(
    selector: Selector<'_>,
    turns: usize,
    progress: ProgressBar,
) -> Result<f64, SolveError> {
    let all = selector.dictionary().all();
    let value = Analyzer::new(selector)
        .with_turns(turns)
        .with_progress(progress.clone())
        .failure(&all, 1);
    progress.finish_and_clear();
    value
}

/// Metric value of playing `guesses` blind against the whole table
///
/// # Errors
///
/// Returns `SolveError::EmptyGuessSequence` if `guesses` is empty.
pub fn evaluate_sequence(
    selector: Selector<'_>,
    guesses: &[&Entry],
) -> Result<f64, SolveError> {
    let dict = selector.dictionary();
    evaluate(dict, selector.metric(), &dict.all(), guesses)
}

/// Best blind opening pair under the selector's metric
///
/// Returns `None` when the table has fewer than two words.
#[must_use]
pub fn top_pair<'a>(selector: Selector<'a>, progress: ProgressBar) -> Option<PairScore<'a>> {
    let pair = best_pair(selector.dictionary(), selector.metric(), &progress);
    progress.finish_and_clear();
    pair
}

/// Best single first guess, shown next to pair results for comparison
///
/// # Errors
///
/// Propagates selector errors.
pub fn best_opening(selector: Selector<'_>) -> Result<ScoredGuess<'_>, SolveError> {
    selector.best(&selector.dictionary().all())
}
