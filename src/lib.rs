//! Wordle Tree
//!
//! A Wordle solver over a frequency-weighted word table: feedback scoring,
//! metric-driven guess selection and recursive game-tree analysis.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tree::core::Word;
//! use wordle_tree::dictionary::{Dictionary, Likelihood};
//! use wordle_tree::solver::{Analyzer, Metric, Selector};
//!
//! let pairs = [("crane", 40), ("slate", 30), ("hello", 10), ("limbo", 5)]
//!     .into_iter()
//!     .map(|(w, f)| (Word::new(w).unwrap(), f));
//! let dict = Dictionary::new(pairs, Likelihood::DEFAULT_LOGISTIC);
//!
//! let selector = Selector::new(&dict, Metric::Entropy, false);
//! let guess = selector.choose(&dict.all()).unwrap();
//! println!("open with {}", guess.text());
//!
//! let turns = Analyzer::new(selector).expected(&dict.all(), 1).unwrap();
//! assert!(turns >= 1.0);
//! ```

// Words and feedback patterns
pub mod core;

// Word table and likelihood weights
pub mod dictionary;

// Guess selection and tree analysis
pub mod solver;

// Turn loop and feedback sources
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;

pub use error::SolveError;
