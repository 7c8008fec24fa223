//! Sources of feedback for the turn loop

use super::SHORTLIST_LIMIT;
use crate::core::{Pattern, Word};
use crate::dictionary::Entry;
use crate::error::SolveError;
use rustc_hash::FxHashMap;
use std::io::{BufRead, Write};

/// Answers a guess with a feedback pattern
pub trait Oracle {
    /// Feedback for `guess` on `turn` (1-based), given the current candidates
    ///
    /// # Errors
    ///
    /// Implementations fail when feedback cannot be obtained, such as a
    /// closed input stream.
    fn feedback(
        &mut self,
        turn: usize,
        guess: &Entry,
        candidates: &[&Entry],
    ) -> Result<Pattern, SolveError>;
}

/// Scores every guess against a known hidden word
#[derive(Debug, Clone)]
pub struct HiddenWord {
    hidden: Word,
}

impl HiddenWord {
    #[must_use]
    pub const fn new(hidden: Word) -> Self {
        Self { hidden }
    }

    #[must_use]
    pub const fn hidden(&self) -> &Word {
        &self.hidden
    }
}

impl Oracle for HiddenWord {
    fn feedback(
        &mut self,
        _turn: usize,
        guess: &Entry,
        _: &[&Entry],
    ) -> Result<Pattern, SolveError> {
        Ok(Pattern::calculate(guess.word(), &self.hidden))
    }
}

/// Answers with the most obstructive pattern still consistent with the game
///
/// Each pattern is weighted by the summed surprisal `-ln(weight / total)` of
/// the candidates that produce it, so the adversary keeps many unlikely
/// words alive. Ties go to the higher pattern code.
#[derive(Debug, Clone, Copy)]
pub struct Adversary {
    total: f64,
}

impl Adversary {
    /// `total` is the dictionary-wide weight
    #[must_use]
    pub const fn new(total: f64) -> Self {
        Self { total }
    }
}

impl Oracle for Adversary {
    fn feedback(
        &mut self,
        _turn: usize,
        guess: &Entry,
        candidates: &[&Entry],
    ) -> Result<Pattern, SolveError> {
        let mut surprisal: FxHashMap<Pattern, f64> = FxHashMap::default();
        for hidden in candidates {
            *surprisal
                .entry(Pattern::calculate(guess.word(), hidden.word()))
                .or_insert(0.0) += -(hidden.weight() / self.total).ln();
        }

        surprisal
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .map(|(pattern, _)| pattern)
            .ok_or(SolveError::EmptyCandidates)
    }
}

/// Line-mode player feedback
///
/// Prints the remaining count and the guess, then reads patterns such as
/// `--y-g` until one parses. `win` is accepted for an all-exact pattern.
pub struct Console<R, W> {
    input: R,
    output: W,
    debug: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            debug: false,
        }
    }

    /// List the remaining candidates when there are few of them
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_pattern(&mut self) -> Result<Pattern, SolveError> {
        loop {
            write!(self.output, "Enter score using -gy: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SolveError::InputClosed);
            }

            let line = line.trim();
            if line.eq_ignore_ascii_case("win") {
                return Ok(Pattern::PERFECT);
            }
            match Pattern::parse(line) {
                Some(pattern) => return Ok(pattern),
                None => writeln!(self.output, "Must be 5 characters of g, y and -")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Oracle for Console<R, W> {
    fn feedback(
        &mut self,
        turn: usize,
        guess: &Entry,
        candidates: &[&Entry],
    ) -> Result<Pattern, SolveError> {
        write!(self.output, "Remaining: {}", candidates.len())?;
        if self.debug && candidates.len() < SHORTLIST_LIMIT {
            let words: Vec<&str> = candidates.iter().map(|e| e.text()).collect();
            write!(self.output, " [{}]", words.join(" "))?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Guess {turn}: {}", guess.text().to_uppercase())?;

        self.read_pattern()
    }
}
