//! Formatting utilities for terminal output

use crate::core::{Mark, PackedPattern, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// One letter cell: white on black, yellow or green
#[must_use]
pub fn letter_cell(letter: char, mark: Mark) -> ColoredString {
    let cell = format!("{}", letter.to_ascii_uppercase()).white().bold();
    match mark {
        Mark::Absent => cell.on_black(),
        Mark::Present => cell.on_yellow(),
        Mark::Exact => cell.on_green(),
    }
}

/// Render a guess with its feedback as colored letter cells
#[must_use]
pub fn feedback_row(guess: &str, pattern: PackedPattern) -> String {
    guess
        .chars()
        .take(WORD_LENGTH)
        .enumerate()
        .map(|(i, letter)| letter_cell(letter, pattern.mark(i)).to_string())
        .collect()
}

/// Create a bar string of `width` cells, `value / max` of them filled
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
