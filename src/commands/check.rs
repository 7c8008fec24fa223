//! Scoring self-check and single-pair scoring

use crate::core::{PackedPattern, Pattern, Word, WordError};

/// Known (guess, hidden, packed feedback) triples
pub const FIXTURES: [(&str, &str, u32); 8] = [
    ("phono", "limbo", 0x00002),
    ("hello", "limbo", 0x00102),
    ("hello", "hello", 0x22222),
    ("stare", "tares", 0x11111),
    ("could", "limbo", 0x01010),
    ("could", "hello", 0x01020),
    ("hello", "could", 0x00021),
    ("llama", "colds", 0x10000),
];

/// A fixture the scorer disagrees with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub guess: &'static str,
    pub hidden: &'static str,
    pub expected: PackedPattern,
    pub actual: PackedPattern,
}

/// Score both words of a pair under both encodings
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid 5-letter word.
pub fn score_pair(guess: &str, hidden: &str) -> Result<(Word, Pattern, PackedPattern), WordError> {
    let guess = Word::new(guess)?;
    let hidden = Word::new(hidden)?;
    let pattern = Pattern::calculate(&guess, &hidden);
    let packed = PackedPattern::calculate(&guess, &hidden);
    Ok((guess, pattern, packed))
}

/// Run every fixture through both encodings
///
/// A fixture also fails if the compact code disagrees with the packed one.
#[must_use]
pub fn run_check() -> Vec<Mismatch> {
    FIXTURES
        .iter()
        .filter_map(|&(guess, hidden, expected)| {
            let expected = PackedPattern::new(expected);
            let actual = match score_pair(guess, hidden) {
                Ok((_, _, packed)) if packed != expected => packed,
                Ok((_, pattern, _)) => PackedPattern::from(pattern),
                Err(e) => {
                    log::error!("fixture {guess}/{hidden}: {e}");
                    PackedPattern::new(u32::MAX)
                }
            };
            (actual != expected).then_some(Mismatch {
                guess,
                hidden,
                expected,
                actual,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures_pass() {
        assert_eq!(run_check(), Vec::new());
    }

    #[test]
    fn score_pair_agrees() {
        let (word, pattern, packed) = score_pair("CRANE", "trace").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(Pattern::from(packed), pattern);
    }

    #[test]
    fn score_pair_rejects_bad_word() {
        assert!(score_pair("cranes", "trace").is_err());
    }
}
