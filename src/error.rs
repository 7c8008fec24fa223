//! Errors raised while choosing guesses, playing games and analyzing trees

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    /// Feedback so far is inconsistent with every word in the table
    #[error("no candidates remain after turn {turn}: the feedback is contradictory")]
    Contradiction { turn: usize },
    #[error("'{0}' is not a word in the table")]
    UnknownWord(String),
    #[error("at least one guess is required")]
    EmptyGuessSequence,
    #[error("cannot choose a guess for an empty candidate set")]
    EmptyCandidates,
    #[error("input closed before the game finished")]
    InputClosed,
    #[error(transparent)]
    Input(#[from] io::Error),
}
