//! Hidden-word inference from shared result grids
//!
//! Given only the feedback rows of other players' games (no guesses), find the
//! table words that could have been the hidden word. Rows are grouped with `/`
//! separators, one group per shared grid. A word fits when, for every pattern,
//! at least as many table words produce that pattern against it as the
//! busiest group needed.

use crate::core::{PATTERN_COUNT, Pattern};
use crate::dictionary::{Dictionary, Entry};
use rayon::prelude::*;
use std::fmt;

/// Argument that separates two result grids
pub const GROUP_SEPARATOR: &str = "/";

/// Parsed filter arguments
#[derive(Debug, Clone)]
pub struct FilterQuery {
    /// Per pattern, the most rows any single group showed
    required: [u32; PATTERN_COUNT],
    /// Per pattern, rows across all groups
    seen: [u32; PATTERN_COUNT],
}

/// A filter argument that is neither a separator nor a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow(pub String);

impl fmt::Display for InvalidRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid feedback row '{}': use 5 of g, y, -", self.0)
    }
}

impl std::error::Error for InvalidRow {}

impl FilterQuery {
    /// Parse rows such as `["-y--g", "ggggg", "/", "--y--", "ggggg"]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRow` for the first argument that does not parse.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, InvalidRow> {
        let mut required = [0u32; PATTERN_COUNT];
        let mut seen = [0u32; PATTERN_COUNT];
        let mut group = [0u32; PATTERN_COUNT];

        let flush = |group: &mut [u32; PATTERN_COUNT], required: &mut [u32; PATTERN_COUNT]| {
            for (need, count) in required.iter_mut().zip(group.iter_mut()) {
                *need = (*need).max(*count);
                *count = 0;
            }
        };

        for arg in args {
            let arg = arg.as_ref();
            if arg == GROUP_SEPARATOR {
                flush(&mut group, &mut required);
                continue;
            }
            let pattern = Pattern::parse(arg).ok_or_else(|| InvalidRow(arg.to_string()))?;
            group[pattern.index()] += 1;
            seen[pattern.index()] += 1;
        }
        flush(&mut group, &mut required);

        Ok(Self { required, seen })
    }

    /// Rows needed for `pattern`
    #[must_use]
    pub fn required(&self, pattern: Pattern) -> u32 {
        self.required[pattern.index()]
    }

    /// Plausibility of `hidden`, or `None` if it cannot explain the rows
    ///
    /// The score sums, over table words producing a requested pattern, the
    /// word's weight times how often that pattern was seen.
    #[must_use]
    pub fn score(&self, dict: &Dictionary, hidden: &Entry) -> Option<f64> {
        let mut count = [0u32; PATTERN_COUNT];
        let mut score = 0.0;

        for guess in dict.entries() {
            let pattern = Pattern::calculate(guess.word(), hidden.word());
            if self.required[pattern.index()] > 0 {
                count[pattern.index()] += 1;
                score += guess.weight() * f64::from(self.seen[pattern.index()]);
            }
        }

        self.required
            .iter()
            .zip(&count)
            .all(|(need, have)| have >= need)
            .then_some(score)
    }
}

/// A table word consistent with the query
#[derive(Debug, Clone, Copy)]
pub struct FilterMatch<'a> {
    pub entry: &'a Entry,
    pub score: f64,
}

/// Every table word that fits `query`, most plausible first
#[must_use]
pub fn run_filter<'a>(dict: &'a Dictionary, query: &FilterQuery) -> Vec<FilterMatch<'a>> {
    let mut matches: Vec<FilterMatch<'a>> = dict
        .entries()
        .par_iter()
        .filter_map(|entry| query.score(dict, entry).map(|score| FilterMatch { entry, score }))
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.entry.index().cmp(&b.entry.index()))
    });
    log::info!("{} of {} words fit the query", matches.len(), dict.len());
    matches
}
