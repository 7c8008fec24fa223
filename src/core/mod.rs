//! Core domain types for Wordle
//!
//! Words and feedback patterns. Everything here is pure and allocation-free
//! apart from the word's owned text.

mod pattern;
mod word;

pub use pattern::{Mark, PATTERN_COUNT, PackedPattern, Pattern, marks};
pub use word::{WORD_LENGTH, Word, WordError};
