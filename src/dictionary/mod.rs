//! The loaded word table
//!
//! A [`Dictionary`] is built once at startup and is read-only afterwards. It is
//! the run context every selector and analyzer borrows: the entries with their
//! weights, and the total weight used to normalize them.

mod likelihood;
pub mod loader;

pub use likelihood::{Likelihood, LikelihoodKind};
pub use loader::LoadError;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// One word of the table
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    word: Word,
    frequency: u64,
    weight: f64,
    index: usize,
}

impl Entry {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }

    /// Raw corpus frequency
    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Unnormalized likelihood weight
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Stable position in the table
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Word table plus its total weight
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    total: f64,
    likelihood: Likelihood,
}

impl Dictionary {
    /// Build a dictionary from `(word, frequency)` pairs
    ///
    /// Pairs with zero frequency are excluded, and a repeated word keeps only
    /// its first pair. Indices follow input order among the kept pairs.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Word;
    /// use wordle_tree::dictionary::{Dictionary, Likelihood};
    ///
    /// let pairs = vec![
    ///     (Word::new("hello").unwrap(), 3),
    ///     (Word::new("limbo").unwrap(), 1),
    /// ];
    /// let dict = Dictionary::new(pairs, Likelihood::Linear);
    /// assert_eq!(dict.len(), 2);
    /// assert!((dict.total() - 4.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = (Word, u64)>, likelihood: Likelihood) -> Self {
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let entries: Vec<Entry> = pairs
            .into_iter()
            .filter(|&(_, frequency)| frequency > 0)
            .filter(|(word, _)| {
                let first = seen.insert(word.clone());
                if !first {
                    log::debug!("skipping repeated word {word}");
                }
                first
            })
            .enumerate()
            .map(|(index, (word, frequency))| Entry {
                word,
                frequency,
                weight: likelihood.weight(frequency),
                index,
            })
            .collect();

        let total = entries.iter().map(Entry::weight).sum();

        Self {
            entries,
            total,
            likelihood,
        }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Every entry as a candidate set
    #[must_use]
    pub fn all(&self) -> Vec<&Entry> {
        self.entries.iter().collect()
    }

    /// Sum of all weights
    #[inline]
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub const fn likelihood(&self) -> Likelihood {
        self.likelihood
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prior probability of `entry` being the hidden word
    #[inline]
    #[must_use]
    pub fn probability(&self, entry: &Entry) -> f64 {
        entry.weight / self.total
    }

    /// Combined prior probability of a candidate set
    #[must_use]
    pub fn mass(&self, candidates: &[&Entry]) -> f64 {
        candidates.iter().map(|e| e.weight).sum::<f64>() / self.total
    }

    /// Look up a word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.text() == text)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Small linear-weighted table used across the crate's tests
    pub fn dictionary(pairs: &[(&str, u64)]) -> Dictionary {
        Dictionary::new(
            pairs
                .iter()
                .map(|&(text, freq)| (Word::new(text).unwrap(), freq)),
            Likelihood::Linear,
        )
    }

    pub fn sample() -> Dictionary {
        dictionary(&[
            ("crane", 50),
            ("slate", 40),
            ("irate", 30),
            ("crate", 25),
            ("grate", 20),
            ("trace", 15),
            ("hello", 12),
            ("limbo", 10),
            ("could", 8),
            ("llama", 6),
            ("colds", 5),
            ("stare", 4),
            ("tares", 3),
            ("phono", 2),
        ])
    }
}
