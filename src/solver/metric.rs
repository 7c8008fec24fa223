//! Objective functions over a feedback bucket distribution
//!
//! A guess partitions the candidate set into up to 243 buckets, one per
//! feedback pattern. Each [`Metric`] reduces that partition to a single score
//! where higher is always better.

use crate::core::{PATTERN_COUNT, Pattern};
use crate::dictionary::{Dictionary, Entry};
use std::fmt;

/// Per-pattern weight mass and candidate count for one guess
#[derive(Debug, Clone)]
pub struct Buckets {
    mass: [f64; PATTERN_COUNT],
    size: [u32; PATTERN_COUNT],
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            mass: [0.0; PATTERN_COUNT],
            size: [0; PATTERN_COUNT],
        }
    }
}

impl Buckets {
    /// Partition `candidates` by the pattern `guess` produces against each
    #[must_use]
    pub fn build(guess: &Entry, candidates: &[&Entry]) -> Self {
        let mut buckets = Self::default();
        for &hidden in candidates {
            buckets.add(Pattern::calculate(guess.word(), hidden.word()), hidden.weight());
        }
        buckets
    }

    #[inline]
    pub fn add(&mut self, pattern: Pattern, weight: f64) {
        self.mass[pattern.index()] += weight;
        self.size[pattern.index()] += 1;
    }

    #[must_use]
    pub fn mass(&self, pattern: Pattern) -> f64 {
        self.mass[pattern.index()]
    }

    #[must_use]
    pub fn size(&self, pattern: Pattern) -> u32 {
        self.size[pattern.index()]
    }

    /// Number of buckets holding at least one candidate
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.size.iter().filter(|&&s| s > 0).count()
    }

    /// Size of the largest bucket
    #[must_use]
    pub fn largest(&self) -> u32 {
        self.size.iter().copied().max().unwrap_or(0)
    }
}

/// Guess-ranking objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Metric {
    /// Shannon entropy of the pattern distribution, in bits
    #[default]
    Entropy,
    /// Negated likelihood-weighted expected bucket size
    #[value(name = "exp")]
    ExpectedSize,
    /// Negated worst-case bucket size (minimax)
    #[value(name = "max")]
    MaxSize,
    /// Number of distinguishable outcomes
    #[value(name = "num")]
    BucketCount,
}

impl Metric {
    /// Score a bucket distribution; `total` is the dictionary-wide weight
    ///
    /// Zero-mass buckets are skipped, so no logarithm of zero is taken.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Pattern;
    /// use wordle_tree::solver::{Buckets, Metric};
    ///
    /// let mut buckets = Buckets::default();
    /// buckets.add(Pattern::new(0), 1.0);
    /// buckets.add(Pattern::PERFECT, 1.0);
    ///
    /// assert!((Metric::Entropy.score(&buckets, 2.0) - 1.0).abs() < 1e-12);
    /// assert!((Metric::MaxSize.score(&buckets, 2.0) + 1.0).abs() < 1e-12);
    /// assert!((Metric::BucketCount.score(&buckets, 2.0) - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn score(self, buckets: &Buckets, total: f64) -> f64 {
        match self {
            Self::Entropy => buckets
                .mass
                .iter()
                .filter(|&&m| m > 0.0)
                .map(|&m| {
                    let p = m / total;
                    -p * p.log2()
                })
                .sum(),
            Self::ExpectedSize => -buckets
                .mass
                .iter()
                .zip(&buckets.size)
                .filter(|&(&m, _)| m > 0.0)
                .map(|(&m, &s)| m / total * f64::from(s))
                .sum::<f64>(),
            Self::MaxSize => -f64::from(buckets.largest()),
            Self::BucketCount => buckets.occupied() as f64,
        }
    }

    /// Build the buckets for `guess` and score them
    #[must_use]
    pub fn evaluate(self, dict: &Dictionary, guess: &Entry, candidates: &[&Entry]) -> f64 {
        self.score(&Buckets::build(guess, candidates), dict.total())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "entropy",
            Self::ExpectedSize => "expected bucket size",
            Self::MaxSize => "max bucket size",
            Self::BucketCount => "bucket count",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fixtures;

    fn buckets(contents: &[(u8, f64, u32)]) -> Buckets {
        let mut b = Buckets::default();
        for &(code, mass, size) in contents {
            for _ in 0..size {
                b.add(Pattern::new(code), mass / f64::from(size));
            }
        }
        b
    }

    #[test]
    fn entropy_uniform_distribution() {
        let b = buckets(&[(0, 1.0, 1), (1, 1.0, 1), (2, 1.0, 1), (3, 1.0, 1)]);
        assert!((Metric::Entropy.score(&b, 4.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_certain_outcome_is_zero() {
        let b = buckets(&[(7, 10.0, 10)]);
        assert!(Metric::Entropy.score(&b, 10.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_prefers_even_split() {
        let even = buckets(&[(0, 25.0, 25), (1, 25.0, 25), (2, 25.0, 25), (3, 25.0, 25)]);
        let skewed = buckets(&[(0, 97.0, 97), (1, 1.0, 1), (2, 1.0, 1), (3, 1.0, 1)]);
        assert!(Metric::Entropy.score(&even, 100.0) > Metric::Entropy.score(&skewed, 100.0));
    }

    #[test]
    fn empty_buckets_score_zero() {
        let b = Buckets::default();
        for metric in [
            Metric::Entropy,
            Metric::ExpectedSize,
            Metric::MaxSize,
            Metric::BucketCount,
        ] {
            let score = metric.score(&b, 1.0);
            assert!(score.abs() < 1e-12 && !score.is_nan(), "{metric}");
        }
    }

    #[test]
    fn expected_size_weights_by_mass() {
        // 3/4 of the mass sits in a bucket of 3, 1/4 in a bucket of 1
        let b = buckets(&[(0, 3.0, 3), (1, 1.0, 1)]);
        let expected = -(0.75 * 3.0 + 0.25 * 1.0);
        assert!((Metric::ExpectedSize.score(&b, 4.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn max_size_never_prefers_larger_worst_case() {
        let small = buckets(&[(0, 2.0, 2), (1, 2.0, 2)]);
        let large = buckets(&[(0, 3.0, 3), (1, 1.0, 1)]);
        assert!(Metric::MaxSize.score(&small, 4.0) > Metric::MaxSize.score(&large, 4.0));
    }

    #[test]
    fn bucket_count_counts_nonempty() {
        let b = buckets(&[(0, 1.0, 1), (100, 1.0, 1), (242, 2.0, 2)]);
        assert_eq!(b.occupied(), 3);
        assert_eq!(b.largest(), 2);
        assert!((Metric::BucketCount.score(&b, 4.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn build_partitions_candidates() {
        let dict = fixtures::sample();
        let candidates = dict.all();
        let guess = dict.find("crane").unwrap();

        let b = Buckets::build(guess, &candidates);
        let total_size: u32 = (0..=242u8).map(|c| b.size(Pattern::new(c))).sum();
        let total_mass: f64 = (0..=242u8).map(|c| b.mass(Pattern::new(c))).sum();

        assert_eq!(total_size as usize, candidates.len());
        assert!((total_mass - dict.total()).abs() < 1e-9);
        assert_eq!(b.size(Pattern::PERFECT), 1);
    }
}
