//! Non-interactive games
//!
//! Plays a game against a known hidden word, or against the adversary that
//! always answers with the most obstructive consistent pattern.

use crate::core::Word;
use crate::game::{Adversary, Game, GameResult, HiddenWord};
use crate::error::SolveError;

/// Play against `hidden`
///
/// The hidden word need not be in the table; if it is not, the game ends in
/// a contradiction once every table word has been ruled out.
///
/// # Errors
///
/// Returns `SolveError::UnknownWord` if `hidden` is not a valid 5-letter word,
/// and propagates errors from the game.
pub fn solve_word<'a>(game: &Game<'a>, hidden: &str) -> Result<GameResult<'a>, SolveError> {
    let hidden = Word::new(hidden).map_err(|e| SolveError::UnknownWord(format!("{hidden}: {e}")))?;
    log::info!("solving for {hidden}");
    game.run(&mut HiddenWord::new(hidden))
}

/// Play against the adversary
///
/// # Errors
///
/// Propagates errors from the game.
pub fn play_adversary<'a>(game: &Game<'a>) -> Result<GameResult<'a>, SolveError> {
    let total = game.selector().dictionary().total();
    game.run(&mut Adversary::new(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fixtures::sample;
    use crate::solver::{Metric, Selector};

    #[test]
    fn solve_word_succeeds() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));

        let result = solve_word(&game, "trace").unwrap();
        assert!(result.solved);
        assert_eq!(result.steps.last().unwrap().guess.text(), "trace");
    }

    #[test]
    fn solve_records_history() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::ExpectedSize, false));

        let result = solve_word(&game, "could").unwrap();
        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_hidden_returns_error() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));

        assert!(matches!(
            solve_word(&game, "toolong"),
            Err(SolveError::UnknownWord(_))
        ));
    }

    #[test]
    fn solve_accepts_uppercase_hidden() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));
        assert!(solve_word(&game, "HELLO").unwrap().solved);
    }

    #[test]
    fn adversary_never_contradicts() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));

        let result = play_adversary(&game).unwrap();
        assert!(result.solved || result.turns() == 6);
        for step in &result.steps {
            assert!(step.candidates_after >= 1);
        }
    }
}
