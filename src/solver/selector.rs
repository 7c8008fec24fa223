//! Metric-driven guess selection
//!
//! Every allowed guess is scored independently against the candidate set, in
//! parallel, and the results are folded with a total order so the winner does
//! not depend on evaluation order.

use super::metric::{Buckets, Metric};
use crate::dictionary::{Dictionary, Entry};
use crate::error::SolveError;
use rayon::prelude::*;
use std::cmp::Ordering;

/// One evaluated guess
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub entry: &'a Entry,
    pub value: f64,
    /// The guess could itself be the hidden word
    pub is_candidate: bool,
}

impl ScoredGuess<'_> {
    /// Total order used to pick the best guess
    ///
    /// Higher metric value wins; then a surviving candidate beats a
    /// non-candidate; then the higher weight wins; then the lower table index.
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(self.is_candidate.cmp(&other.is_candidate))
            .then(self.entry.weight().total_cmp(&other.entry.weight()))
            .then(other.entry.index().cmp(&self.entry.index()))
    }
}

/// Chooses guesses for a candidate set
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    dict: &'a Dictionary,
    metric: Metric,
    hard: bool,
}

impl<'a> Selector<'a> {
    /// Create a selector
    ///
    /// # Parameters
    /// - `dict`: the loaded word table; every entry is a legal guess outside hard mode
    /// - `metric`: objective used to rank guesses
    /// - `hard`: restrict guesses to the current candidates
    #[must_use]
    pub const fn new(dict: &'a Dictionary, metric: Metric, hard: bool) -> Self {
        Self { dict, metric, hard }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dict
    }

    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub const fn is_hard(&self) -> bool {
        self.hard
    }

    /// Score a single guess against `candidates`
    #[must_use]
    pub fn score(&self, guess: &'a Entry, candidates: &[&Entry]) -> ScoredGuess<'a> {
        let buckets = Buckets::build(guess, candidates);
        let is_candidate = !self.hard && candidates.iter().any(|h| h.index() == guess.index());

        ScoredGuess {
            entry: guess,
            value: self.metric.score(&buckets, self.dict.total()),
            is_candidate,
        }
    }

    /// Evaluate the whole allowed pool and return the best guess
    ///
    /// # Errors
    ///
    /// Returns `SolveError::EmptyCandidates` if `candidates` is empty.
    pub fn best(&self, candidates: &[&'a Entry]) -> Result<ScoredGuess<'a>, SolveError> {
        if candidates.is_empty() {
            return Err(SolveError::EmptyCandidates);
        }

        let all;
        let pool: &[&'a Entry] = if self.hard {
            candidates
        } else {
            all = self.dict.all();
            &all
        };

        let best = pool
            .par_iter()
            .map(|&guess| self.score(guess, candidates))
            .max_by(ScoredGuess::rank)
            .ok_or(SolveError::EmptyCandidates)?;

        log::debug!(
            "chose {} ({} {:.4}) from {} guesses for {} candidates",
            best.entry.text(),
            self.metric,
            best.value,
            pool.len(),
            candidates.len()
        );
        Ok(best)
    }

    /// Choose the next guess
    ///
    /// A single remaining candidate is returned without evaluation.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::EmptyCandidates` if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Word;
    /// use wordle_tree::dictionary::{Dictionary, Likelihood};
    /// use wordle_tree::solver::{Metric, Selector};
    ///
    /// let pairs = ["hello", "limbo", "could"]
    ///     .into_iter()
    ///     .map(|w| (Word::new(w).unwrap(), 1));
    /// let dict = Dictionary::new(pairs, Likelihood::Linear);
    /// let selector = Selector::new(&dict, Metric::Entropy, false);
    ///
    /// let only = [&dict.entries()[1]];
    /// assert_eq!(selector.choose(&only).unwrap().text(), "limbo");
    /// ```
    pub fn choose(&self, candidates: &[&'a Entry]) -> Result<&'a Entry, SolveError> {
        match candidates {
            [] => Err(SolveError::EmptyCandidates),
            [only] => Ok(*only),
            _ => Ok(self.best(candidates)?.entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fixtures::{dictionary, sample};

    fn pick<'a>(dict: &'a Dictionary, words: &[&str]) -> Vec<&'a Entry> {
        words.iter().map(|w| dict.find(w).unwrap()).collect()
    }

    #[test]
    fn singleton_short_circuits() {
        let dict = sample();
        let selector = Selector::new(&dict, Metric::Entropy, false);
        let candidates = pick(&dict, &["phono"]);
        assert_eq!(selector.choose(&candidates).unwrap().text(), "phono");
    }

    #[test]
    fn empty_candidates_is_error() {
        let dict = sample();
        let selector = Selector::new(&dict, Metric::Entropy, false);
        assert!(matches!(
            selector.choose(&[]),
            Err(SolveError::EmptyCandidates)
        ));
    }

    #[test]
    fn prefers_splitting_guess() {
        // "abcde" splits the candidates, "zzzzz" leaves them in one bucket
        let dict = dictionary(&[("zzzzz", 100), ("abcde", 1), ("axxxx", 1), ("xbxxx", 1)]);
        let candidates = pick(&dict, &["axxxx", "xbxxx"]);

        for metric in [
            Metric::Entropy,
            Metric::ExpectedSize,
            Metric::MaxSize,
            Metric::BucketCount,
        ] {
            let selector = Selector::new(&dict, metric, false);
            let best = selector.choose(&candidates).unwrap();
            assert_ne!(best.text(), "zzzzz", "{metric}");
        }
    }

    #[test]
    fn tie_prefers_candidate_then_weight() {
        // every guess separates the two candidates equally well
        let dict = dictionary(&[("aaaaa", 1), ("bbbbb", 5), ("abxxx", 50)]);
        let candidates = pick(&dict, &["aaaaa", "bbbbb"]);
        let selector = Selector::new(&dict, Metric::BucketCount, false);

        let best = selector.best(&candidates).unwrap();
        assert!(best.is_candidate);
        assert_eq!(best.entry.text(), "bbbbb");
    }

    #[test]
    fn hard_mode_restricts_pool() {
        // "abcyy" separates all three; any candidate only splits off itself
        let dict = dictionary(&[("abcyy", 1), ("axxxx", 1), ("bxxxx", 1), ("cxxxx", 1)]);
        let candidates = pick(&dict, &["axxxx", "bxxxx", "cxxxx"]);

        let easy = Selector::new(&dict, Metric::Entropy, false);
        assert_eq!(easy.choose(&candidates).unwrap().text(), "abcyy");

        let hard = Selector::new(&dict, Metric::Entropy, true);
        let guess = hard.choose(&candidates).unwrap();
        assert!(candidates.iter().any(|c| c.index() == guess.index()));
    }

    #[test]
    fn candidate_flag_only_outside_hard_mode() {
        let dict = sample();
        let candidates = pick(&dict, &["hello", "limbo"]);
        let hello = dict.find("hello").unwrap();

        let easy = Selector::new(&dict, Metric::Entropy, false);
        assert!(easy.score(hello, &candidates).is_candidate);

        let hard = Selector::new(&dict, Metric::Entropy, true);
        assert!(!hard.score(hello, &candidates).is_candidate);
    }

    #[test]
    fn choice_is_deterministic() {
        let dict = sample();
        let candidates = dict.all();
        let selector = Selector::new(&dict, Metric::Entropy, false);

        let first = selector.choose(&candidates).unwrap();
        for _ in 0..20 {
            assert_eq!(selector.choose(&candidates).unwrap().index(), first.index());
        }
    }

    #[test]
    fn rank_matches_sequential_fold() {
        let dict = sample();
        let candidates = dict.all();
        let selector = Selector::new(&dict, Metric::ExpectedSize, false);

        let sequential = dict
            .entries()
            .iter()
            .map(|g| selector.score(g, &candidates))
            .reduce(|best, g| if g.rank(&best) == Ordering::Greater { g } else { best })
            .unwrap();

        assert_eq!(
            selector.best(&candidates).unwrap().entry.index(),
            sequential.entry.index()
        );
    }
}
