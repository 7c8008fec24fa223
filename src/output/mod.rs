//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check, print_filter_matches, print_game, print_outcome,
    print_pair, print_score, print_value,
};
