//! Interactive line-mode play
//!
//! The solver suggests each guess and the player types the feedback they got.

use crate::game::{Console, Game, GameResult};
use crate::error::SolveError;
use std::io::{BufRead, Write};

/// Run one interactive game over `input` and `output`
///
/// # Errors
///
/// Returns `SolveError::InputClosed` if input ends mid-game,
/// `SolveError::Contradiction` if the entered feedback rules out every word,
/// and `SolveError::Input` on I/O failure.
pub fn run_interactive<'a, R: BufRead, W: Write>(
    game: &Game<'a>,
    input: R,
    output: W,
    debug: bool,
) -> Result<GameResult<'a>, SolveError> {
    let mut console = Console::new(input, output).with_debug(debug);
    game.run(&mut console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};
    use crate::dictionary::fixtures::sample;
    use crate::solver::{Metric, Selector};
    use std::io::Cursor;

    #[test]
    fn forced_guess_then_win() {
        let dict = sample();
        let hello = dict.find("hello").unwrap();
        let game =
            Game::new(Selector::new(&dict, Metric::Entropy, false)).with_opening(vec![hello]);

        let result = run_interactive(&game, Cursor::new("ggggg\n"), Vec::new(), false).unwrap();
        assert!(result.solved);
        assert_eq!(result.turns(), 1);
    }

    #[test]
    fn honest_feedback_reaches_hidden_word() {
        // feed back what "limbo" would answer to each forced guess
        let dict = sample();
        let guesses = ["hello", "phono", "limbo"].map(|w| dict.find(w).unwrap());
        let limbo = Word::new("limbo").unwrap();
        let script: String = guesses
            .iter()
            .map(|g| format!("{}\n", Pattern::calculate(g.word(), &limbo)))
            .collect();

        let game = Game::new(Selector::new(&dict, Metric::Entropy, false))
            .with_opening(guesses.to_vec());
        let result = run_interactive(&game, Cursor::new(script), Vec::new(), false).unwrap();

        assert!(result.solved);
        assert_eq!(result.turns(), 3);
    }

    #[test]
    fn closed_input_is_error() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));
        let err = run_interactive(&game, Cursor::new("-----\n"), Vec::new(), false).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InputClosed | SolveError::Contradiction { .. }
        ));
    }
}
