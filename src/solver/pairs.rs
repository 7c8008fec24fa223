//! Exhaustive search for the best fixed opening pair

use super::analyzer::partition;
use super::metric::Metric;
use crate::dictionary::{Dictionary, Entry};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::cmp::Ordering;

/// An opening pair and the metric value of playing it blind
#[derive(Debug, Clone, Copy)]
pub struct PairScore<'a> {
    /// Guess played on turn 1
    pub first: &'a Entry,
    /// Guess played on turn 2 regardless of the first feedback
    pub second: &'a Entry,
    pub value: f64,
}

impl PairScore<'_> {
    /// Higher value wins; ties go to the pair with lower table indices
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(other.first.index().cmp(&self.first.index()))
            .then(other.second.index().cmp(&self.second.index()))
    }
}

/// Score every unordered pair of table words as a two-guess sequence
///
/// The word with the larger index is played first, so each pair is
/// considered once. Returns `None` when the table has fewer than two words.
#[must_use]
pub fn best_pair<'a>(
    dict: &'a Dictionary,
    metric: Metric,
    progress: &ProgressBar,
) -> Option<PairScore<'a>> {
    let candidates = dict.all();
    progress.set_length(candidates.len() as u64);

    let best = candidates
        .par_iter()
        .filter_map(|&first| {
            let children = partition(first, &candidates);
            let best = candidates[..first.index()]
                .iter()
                .map(|&second| PairScore {
                    first,
                    second,
                    value: children
                        .iter()
                        .map(|(_, child)| metric.evaluate(dict, second, child))
                        .sum(),
                })
                .max_by(PairScore::rank);
            progress.inc(1);
            best
        })
        .max_by(PairScore::rank);

    if let Some(pair) = &best {
        log::info!(
            "best pair {}/{} ({} {:.4})",
            pair.first.text(),
            pair.second.text(),
            metric,
            pair.value
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fixtures::{dictionary, sample};
    use crate::solver::analyzer::evaluate;

    #[test]
    fn single_word_has_no_pair() {
        let dict = dictionary(&[("hello", 1)]);
        assert!(best_pair(&dict, Metric::Entropy, &ProgressBar::hidden()).is_none());
    }

    #[test]
    fn pair_value_matches_sequence_evaluation() {
        let dict = sample();
        let pair = best_pair(&dict, Metric::Entropy, &ProgressBar::hidden()).unwrap();

        assert!(pair.second.index() < pair.first.index());
        let value =
            evaluate(&dict, Metric::Entropy, &dict.all(), &[pair.first, pair.second]).unwrap();
        assert!((value - pair.value).abs() < 1e-12);
    }

    #[test]
    fn best_pair_dominates_every_pair() {
        let dict = sample();
        let candidates = dict.all();
        let pair = best_pair(&dict, Metric::BucketCount, &ProgressBar::hidden()).unwrap();

        for &first in &candidates {
            for &second in &candidates[..first.index()] {
                let value =
                    evaluate(&dict, Metric::BucketCount, &candidates, &[first, second]).unwrap();
                assert!(value <= pair.value + 1e-12);
            }
        }
    }

    #[test]
    fn ties_keep_lower_indices() {
        // every pair yields three buckets in total
        let dict = dictionary(&[("aaaaa", 1), ("bbbbb", 1), ("ccccc", 1)]);
        let pair = best_pair(&dict, Metric::BucketCount, &ProgressBar::hidden()).unwrap();
        assert_eq!(pair.first.text(), "bbbbb");
        assert_eq!(pair.second.text(), "aaaaa");
    }
}
