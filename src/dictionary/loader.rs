//! Word table loading
//!
//! Two layouts are supported:
//!
//! - a single table, one `word frequency` pair per line;
//! - a plain word list plus a separate `word frequency` table, where repeated
//!   keys in the frequency table are summed.
//!
//! Lines that do not yield a valid 5-letter word with a positive frequency are
//! skipped, never fatal. A missing, unreadable or empty source is.

use super::{Dictionary, Likelihood};
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read word table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word table {} contains no usable entries", path.display())]
    Empty { path: PathBuf },
}

/// Parse a single `word frequency` line
///
/// Returns `None` for blank lines, missing or non-numeric frequencies,
/// zero frequencies and invalid words.
fn parse_line(line: &str) -> Option<(Word, u64)> {
    let mut parts = line.split_whitespace();
    let word = Word::new(parts.next()?).ok()?;
    let frequency: u64 = parts.next()?.parse().ok()?;
    (frequency > 0).then_some((word, frequency))
}

/// Parse a `word frequency` table in file order
///
/// # Examples
/// ```
/// use wordle_tree::dictionary::loader::parse_table;
///
/// let pairs = parse_table("hello 12\nlimbo x\ncould 0\n\nstare 7\n");
/// let words: Vec<&str> = pairs.iter().map(|(w, _)| w.text()).collect();
/// assert_eq!(words, ["hello", "stare"]);
/// ```
#[must_use]
pub fn parse_table(content: &str) -> Vec<(Word, u64)> {
    let mut skipped = 0usize;
    let pairs: Vec<(Word, u64)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                log::debug!("skipping word table line {line:?}");
                skipped += 1;
            }
            parsed
        })
        .collect();

    if skipped > 0 {
        log::info!("skipped {skipped} malformed word table lines");
    }
    pairs
}

/// Join a plain word list with a separate frequency table
///
/// Frequencies for the same word are summed. Words keep word-list order;
/// those without a positive total are dropped.
#[must_use]
pub fn parse_frequency_table(words: &str, frequencies: &str) -> Vec<(Word, u64)> {
    let mut totals: FxHashMap<Word, u64> = FxHashMap::default();
    for (word, frequency) in parse_table(frequencies) {
        *totals.entry(word).or_insert(0) += frequency;
    }

    words
        .lines()
        .filter_map(|line| Word::new(line.split_whitespace().next()?).ok())
        .filter_map(|word| {
            let frequency = totals.get(&word).copied().unwrap_or(0);
            (frequency > 0).then_some((word, frequency))
        })
        .collect()
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn finish(
    pairs: Vec<(Word, u64)>,
    likelihood: Likelihood,
    path: &Path,
) -> Result<Dictionary, LoadError> {
    let dict = Dictionary::new(pairs, likelihood);
    if dict.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    log::info!(
        "loaded {} words from {} (total weight {:.3}, {})",
        dict.len(),
        path.display(),
        dict.total(),
        likelihood
    );
    Ok(dict)
}

/// Load a `word frequency` table from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Empty`
/// if no line yields a usable entry.
///
/// # Examples
/// ```no_run
/// use wordle_tree::dictionary::{Likelihood, loader::load_table};
///
/// let dict = load_table("words", Likelihood::Linear).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_table<P: AsRef<Path>>(
    path: P,
    likelihood: Likelihood,
) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    finish(parse_table(&read(path)?), likelihood, path)
}

/// Load a word list and a separate frequency table
///
/// # Errors
///
/// Returns `LoadError::Io` if either file cannot be read and
/// `LoadError::Empty` if no word has a positive frequency.
pub fn load_with_frequencies<P: AsRef<Path>, Q: AsRef<Path>>(
    words: P,
    frequencies: Q,
    likelihood: Likelihood,
) -> Result<Dictionary, LoadError> {
    let words = words.as_ref();
    let pairs = parse_frequency_table(&read(words)?, &read(frequencies.as_ref())?);
    finish(pairs, likelihood, words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pairs: &[(Word, u64)]) -> Vec<&str> {
        pairs.iter().map(|(w, _)| w.text()).collect()
    }

    #[test]
    fn parse_table_keeps_valid_lines() {
        let pairs = parse_table("hello 12\nlimbo 3\n");
        assert_eq!(texts(&pairs), ["hello", "limbo"]);
        assert_eq!(pairs[0].1, 12);
    }

    #[test]
    fn parse_table_skips_invalid() {
        let content = "hello 12\nlimbo\ncould abc\ncolds 0\ntoolong 5\nst4re 2\n  \nllama 1 extra\n";
        let pairs = parse_table(content);
        assert_eq!(texts(&pairs), ["hello", "llama"]);
    }

    #[test]
    fn frequency_table_sums_duplicates() {
        let words = "hello\nlimbo\ncould\n";
        let freqs = "limbo 2\nhello 1\nlimbo 5\nzzzzz 9\n";
        let pairs = parse_frequency_table(words, freqs);

        assert_eq!(texts(&pairs), ["hello", "limbo"]);
        assert_eq!(pairs[1].1, 7);
    }

    #[test]
    fn repeated_table_rows_collapse() {
        let pairs = parse_table("hello 3\nhello 5\nlimbo 2\n");
        let dict = Dictionary::new(pairs, Likelihood::Linear);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.find("hello").unwrap().frequency(), 3);
        assert_eq!(dict.find("limbo").unwrap().index(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_tree_missing_words_table");
        let err = load_table(&path, Likelihood::Linear).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_table_from_file() {
        let path = std::env::temp_dir().join(format!("wordle_tree_words_{}", std::process::id()));
        fs::write(&path, "hello 3\nlimbo 1\nbad\n").unwrap();

        let dict = load_table(&path, Likelihood::Linear).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 2);
        assert!((dict.total() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn load_empty_table_is_error() {
        let path = std::env::temp_dir().join(format!("wordle_tree_empty_{}", std::process::id()));
        fs::write(&path, "nothing here\n").unwrap();

        let err = load_table(&path, Likelihood::Linear).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::Empty { .. }));
    }
}
