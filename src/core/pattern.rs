//! Wordle feedback calculation and its two encodings
//!
//! Every position of a guess receives one [`Mark`]. The marks are encoded two ways:
//!
//! - [`Pattern`]: a base-3 number (absent = 0, present = 1, exact = 2), first
//!   letter most significant. Range 0..=242, used as a dense bucket index.
//! - [`PackedPattern`]: one nibble per position, first letter in the highest
//!   nibble, so an all-exact result reads `0x22222` in hex. Used for rendering
//!   and for comparing against feedback written out by hand.
//!
//! Both encodings are derived from the same marks, so two (guess, hidden) pairs
//! compare equal under one encoding exactly when they compare equal under the other.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Number of distinct compact patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not available in the hidden word
    Absent = 0,
    /// Letter in the hidden word at another position
    Present = 1,
    /// Letter at exactly this position
    Exact = 2,
}

impl Mark {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Compute the per-position marks for `guess` against `hidden`
///
/// 1. Exact matches are marked first and consume their hidden letter.
/// 2. Unconsumed hidden letters are counted per alphabet slot.
/// 3. Left to right, an unconsumed guess letter with remaining count is
///    marked present and consumes one count; otherwise it is absent.
///
/// A repeated guess letter is therefore marked present at most as many times
/// as it occurs among the unconsumed hidden letters.
#[must_use]
pub fn marks(guess: &Word, hidden: &Word) -> [Mark; WORD_LENGTH] {
    let mut result = [Mark::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // Index needed to compare guess[i], hidden[i] and set both result[i] and consumed[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.chars()[i] == hidden.chars()[i] {
            result[i] = Mark::Exact;
            consumed[i] = true;
        }
    }

    let mut available = [0u8; 26];
    for i in (0..WORD_LENGTH).filter(|&i| !consumed[i]) {
        available[hidden.slot(i)] += 1;
    }

    for i in (0..WORD_LENGTH).filter(|&i| !consumed[i]) {
        let slot = guess.slot(i);
        if available[slot] > 0 {
            result[i] = Mark::Present;
            available[slot] -= 1;
        }
    }

    result
}

/// Compact base-3 feedback code (0..=242)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All positions exact
    pub const PERFECT: Self = Self(242);

    /// Create a pattern from a raw code
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Raw code, usable as a bucket index
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raw code widened for indexing
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Feedback when `guess` is played against `hidden`
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Pattern, Word};
    ///
    /// let guess = Word::new("hello").unwrap();
    /// let hidden = Word::new("limbo").unwrap();
    ///
    /// // h e l l o -> absent absent present absent exact
    /// assert_eq!(Pattern::calculate(&guess, &hidden).value(), 9 + 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, hidden: &Word) -> Self {
        Self::from_marks(&marks(guess, hidden))
    }

    #[must_use]
    pub fn from_marks(marks: &[Mark; WORD_LENGTH]) -> Self {
        Self(marks.iter().fold(0u8, |acc, &m| acc * 3 + m as u8))
    }

    /// Decode back into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut result = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in result.iter_mut().rev() {
            *slot = Mark::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Parse player-entered feedback such as `"-gy-g"`
    ///
    /// Accepts:
    /// - `g`/`G`/🟩 for exact
    /// - `y`/`Y`/🟨 for present elsewhere
    /// - `-`/`_`/`.`/⬜ for absent
    ///
    /// Returns `None` for any other symbol or a length other than 5.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Pattern;
    ///
    /// let p1 = Pattern::parse("--y-g").unwrap();
    /// let p2 = Pattern::parse("⬜⬜🟨⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.value(), 11);
    /// assert!(Pattern::parse("--x-g").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.trim().chars() {
            if len == WORD_LENGTH {
                return None;
            }
            marks[len] = match ch {
                'g' | 'G' | '🟩' => Mark::Exact,
                'y' | 'Y' | '🟨' => Mark::Present,
                '-' | '_' | '.' | '⬜' => Mark::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LENGTH).then(|| Self::from_marks(&marks))
    }

    /// Emoji rendering, e.g. "⬜⬜🟨⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|m| match m {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }

    /// Count of exact positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Exact).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            let ch = match mark {
                Mark::Exact => 'g',
                Mark::Present => 'y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid feedback '{s}': use 5 of g, y, -"))
    }
}

/// Nibble-packed feedback, first letter in the highest nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedPattern(u32);

impl PackedPattern {
    /// All positions exact
    pub const PERFECT: Self = Self(0x22222);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Feedback when `guess` is played against `hidden`
    #[must_use]
    pub fn calculate(guess: &Word, hidden: &Word) -> Self {
        Self::from_marks(&marks(guess, hidden))
    }

    #[must_use]
    pub fn from_marks(marks: &[Mark; WORD_LENGTH]) -> Self {
        Self(marks.iter().fold(0u32, |acc, &m| (acc << 4) | m as u32))
    }

    /// Mark at `position` (0 = first letter)
    #[must_use]
    pub const fn mark(self, position: usize) -> Mark {
        let shift = (WORD_LENGTH - 1 - position) * 4;
        Mark::from_digit(((self.0 >> shift) & 3) as u8)
    }

    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }
}

impl From<Pattern> for PackedPattern {
    fn from(pattern: Pattern) -> Self {
        Self::from_marks(&pattern.marks())
    }
}

impl From<PackedPattern> for Pattern {
    fn from(packed: PackedPattern) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (i, slot) in marks.iter_mut().enumerate() {
            *slot = packed.mark(i);
        }
        Self::from_marks(&marks)
    }
}

impl fmt::LowerHex for PackedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
