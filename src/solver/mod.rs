//! Guess selection and game-tree analysis
//!
//! [`Metric`] scores the partition a guess induces, [`Selector`] picks the best
//! guess for a candidate set, and [`Analyzer`] walks the full decision tree.

pub mod analyzer;
mod metric;
pub mod pairs;
mod selector;

pub use analyzer::{Analyzer, DEFAULT_TURNS, evaluate, partition};
pub use metric::{Buckets, Metric};
pub use pairs::{PairScore, best_pair};
pub use selector::{ScoredGuess, Selector};
