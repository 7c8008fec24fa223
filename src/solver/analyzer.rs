//! Game-tree analysis over the weighted word distribution
//!
//! Each node of the tree is a candidate set. A guess is fixed for the node
//! (from an optional forced sequence, otherwise from the [`Selector`]), the set
//! is partitioned by feedback pattern, and the analysis recurses into every
//! non-empty child. Depth is bounded by the shrinking candidate sets.

use super::metric::{Buckets, Metric};
use super::selector::Selector;
use crate::core::Pattern;
use crate::dictionary::{Dictionary, Entry};
use crate::error::SolveError;
use indicatif::ProgressBar;
use rustc_hash::FxHashMap;

/// Default turn limit of a game
pub const DEFAULT_TURNS: usize = 6;

/// Split `candidates` by the pattern `guess` produces against each of them
///
/// Children come back ordered by pattern code and are never empty.
#[must_use]
pub fn partition<'a>(
    guess: &Entry,
    candidates: &[&'a Entry],
) -> Vec<(Pattern, Vec<&'a Entry>)> {
    let mut groups: FxHashMap<Pattern, Vec<&'a Entry>> = FxHashMap::default();
    for &hidden in candidates {
        groups
            .entry(Pattern::calculate(guess.word(), hidden.word()))
            .or_default()
            .push(hidden);
    }

    let mut children: Vec<_> = groups.into_iter().collect();
    children.sort_unstable_by_key(|(pattern, _)| *pattern);
    children
}

/// Metric value of a fixed guess sequence, without running selection
///
/// The first guess partitions `candidates`; each child is scored with the rest
/// of the sequence, and the last guess is scored with `metric` directly.
///
/// # Errors
///
/// Returns `SolveError::EmptyGuessSequence` if `guesses` is empty.
pub fn evaluate(
    dict: &Dictionary,
    metric: Metric,
    candidates: &[&Entry],
    guesses: &[&Entry],
) -> Result<f64, SolveError> {
    match guesses {
        [] => Err(SolveError::EmptyGuessSequence),
        [last] => Ok(metric.score(&Buckets::build(last, candidates), dict.total())),
        [first, rest @ ..] => partition(first, candidates)
            .iter()
            .map(|(_, child)| evaluate(dict, metric, child, rest))
            .sum(),
    }
}

/// Recursive expected-turns and failure analysis
pub struct Analyzer<'a> {
    selector: Selector<'a>,
    guesses: Vec<&'a Entry>,
    turns: usize,
    progress: ProgressBar,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(selector: Selector<'a>) -> Self {
        Self {
            selector,
            guesses: Vec::new(),
            turns: DEFAULT_TURNS,
            progress: ProgressBar::hidden(),
        }
    }

    /// Force the first guesses instead of selecting them
    #[must_use]
    pub fn with_guesses(mut self, guesses: Vec<&'a Entry>) -> Self {
        self.guesses = guesses;
        self
    }

    /// Turn budget for [`Analyzer::failure`]
    #[must_use]
    pub const fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Report root-level child progress on `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    fn dict(&self) -> &'a Dictionary {
        self.selector.dictionary()
    }

    fn guess_at(&self, candidates: &[&'a Entry], depth: usize) -> Result<&'a Entry, SolveError> {
        // depth is 1-based; depth 0 never has a forced guess
        match depth.checked_sub(1).and_then(|i| self.guesses.get(i)) {
            Some(&forced) => Ok(forced),
            None => self.selector.choose(candidates),
        }
    }

    /// Sum `visit` over the children of a node
    fn descend(
        &self,
        candidates: &[&'a Entry],
        depth: usize,
        visit: impl Fn(&[&'a Entry]) -> Result<f64, SolveError>,
    ) -> Result<f64, SolveError> {
        let guess = self.guess_at(candidates, depth)?;
        let children = partition(guess, candidates);

        if depth == 1 {
            self.progress.set_length(children.len() as u64);
            self.progress.set_message(guess.text().to_string());
        }

        let mut sum = 0.0;
        for (_, child) in &children {
            sum += visit(child)?;
            if depth == 1 {
                self.progress.inc(1);
            }
        }
        Ok(sum)
    }

    /// Likelihood-weighted expected number of turns
    ///
    /// A singleton set at `depth` costs `depth` turns weighted by its prior
    /// probability. Call with `depth = 1` on the full table for the
    /// dictionary-wide expectation.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::EmptyCandidates` if `candidates` is empty.
    pub fn expected(&self, candidates: &[&'a Entry], depth: usize) -> Result<f64, SolveError> {
        match candidates {
            [] => Err(SolveError::EmptyCandidates),
            [only] => Ok(depth as f64 * self.dict().probability(only)),
            _ => self.descend(candidates, depth, |child| self.expected(child, depth + 1)),
        }
    }

    /// Probability mass still ambiguous once the turn budget is reached
    ///
    /// # Errors
    ///
    /// Returns `SolveError::EmptyCandidates` if `candidates` is empty.
    pub fn failure(&self, candidates: &[&'a Entry], depth: usize) -> Result<f64, SolveError> {
        match candidates {
            [] => Err(SolveError::EmptyCandidates),
            [_] => Ok(0.0),
            _ if depth >= self.turns => Ok(self.dict().mass(candidates)),
            _ => self.descend(candidates, depth, |child| self.failure(child, depth + 1)),
        }
    }
}
