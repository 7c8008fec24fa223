//! Turn loop shared by simulated, adversarial and interactive games
//!
//! The loop only knows how to pick a guess and narrow the candidate set. Where
//! the feedback comes from is an [`Oracle`].

mod oracle;

pub use oracle::{Adversary, Console, HiddenWord, Oracle};

use crate::core::Pattern;
use crate::dictionary::Entry;
use crate::error::SolveError;
use crate::solver::{DEFAULT_TURNS, Selector};

/// Candidate sets smaller than this are kept on each [`Step`] for display
pub const SHORTLIST_LIMIT: usize = 20;

/// Keep only the candidates that would have produced `pattern` for `guess`
///
/// # Examples
/// ```
/// use wordle_tree::core::{Pattern, Word};
/// use wordle_tree::dictionary::{Dictionary, Likelihood};
/// use wordle_tree::game::narrow;
///
/// let pairs = ["hello", "limbo", "could"]
///     .into_iter()
///     .map(|w| (Word::new(w).unwrap(), 1));
/// let dict = Dictionary::new(pairs, Likelihood::Linear);
/// let guess = dict.find("hello").unwrap();
///
/// let left = narrow(&dict.all(), guess, "--y-g".parse().unwrap());
/// assert_eq!(left.len(), 1);
/// assert_eq!(left[0].text(), "limbo");
/// ```
#[must_use]
pub fn narrow<'a>(candidates: &[&'a Entry], guess: &Entry, pattern: Pattern) -> Vec<&'a Entry> {
    candidates
        .iter()
        .copied()
        .filter(|h| Pattern::calculate(guess.word(), h.word()) == pattern)
        .collect()
}

/// One played turn
#[derive(Debug, Clone)]
pub struct Step<'a> {
    pub turn: usize,
    pub guess: &'a Entry,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Candidates before the guess, when fewer than [`SHORTLIST_LIMIT`]
    pub shortlist: Vec<&'a Entry>,
}

/// Outcome of a game
#[derive(Debug, Clone)]
pub struct GameResult<'a> {
    pub steps: Vec<Step<'a>>,
    pub solved: bool,
}

impl GameResult<'_> {
    /// Turns played
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// Game configuration: guess selection, turn limit and forced openings
#[derive(Debug, Clone)]
pub struct Game<'a> {
    selector: Selector<'a>,
    turns: usize,
    opening: Vec<&'a Entry>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub const fn new(selector: Selector<'a>) -> Self {
        Self {
            selector,
            turns: DEFAULT_TURNS,
            opening: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Play these guesses first, in order, before consulting the selector
    #[must_use]
    pub fn with_opening(mut self, opening: Vec<&'a Entry>) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub const fn selector(&self) -> &Selector<'a> {
        &self.selector
    }

    /// Play one game against `oracle`, starting from the whole table
    ///
    /// # Errors
    ///
    /// Returns `SolveError::Contradiction` if the feedback leaves no
    /// candidate, and propagates any error raised by the oracle.
    pub fn run<O: Oracle + ?Sized>(&self, oracle: &mut O) -> Result<GameResult<'a>, SolveError> {
        let mut candidates = self.selector.dictionary().all();
        let mut steps = Vec::with_capacity(self.turns);

        for turn in 1..=self.turns {
            let guess = match self.opening.get(turn - 1) {
                Some(&forced) => forced,
                None => self.selector.choose(&candidates)?,
            };

            let pattern = oracle.feedback(turn, guess, &candidates)?;
            let before = candidates.len();
            let shortlist = if before < SHORTLIST_LIMIT {
                candidates.clone()
            } else {
                Vec::new()
            };

            if pattern.is_perfect() {
                steps.push(Step {
                    turn,
                    guess,
                    pattern,
                    candidates_before: before,
                    candidates_after: 1,
                    shortlist,
                });
                log::debug!("solved on turn {turn} with {}", guess.text());
                return Ok(GameResult {
                    steps,
                    solved: true,
                });
            }

            candidates = narrow(&candidates, guess, pattern);
            log::debug!(
                "turn {turn}: {} {pattern} left {} of {before}",
                guess.text(),
                candidates.len()
            );
            steps.push(Step {
                turn,
                guess,
                pattern,
                candidates_before: before,
                candidates_after: candidates.len(),
                shortlist,
            });

            if candidates.is_empty() {
                return Err(SolveError::Contradiction { turn });
            }
        }

        Ok(GameResult {
            steps,
            solved: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::fixtures::sample;
    use crate::solver::Metric;

    /// Replays fixed patterns, ignoring the guess
    struct Scripted(Vec<Pattern>);

    impl Oracle for Scripted {
        fn feedback(
            &mut self,
            turn: usize,
            _guess: &Entry,
            _candidates: &[&Entry],
        ) -> Result<Pattern, SolveError> {
            self.0.get(turn - 1).copied().ok_or(SolveError::InputClosed)
        }
    }

    #[test]
    fn narrow_keeps_exactly_the_consistent_words() {
        let dict = sample();
        let all = dict.all();
        let guess = dict.find("crane").unwrap();

        for hidden in &all {
            let pattern = Pattern::calculate(guess.word(), hidden.word());
            let left = narrow(&all, guess, pattern);
            assert!(left.iter().any(|e| e.index() == hidden.index()));

            for survivor in &left {
                assert_eq!(Pattern::calculate(guess.word(), survivor.word()), pattern);
            }
            for dropped in all
                .iter()
                .filter(|e| !left.iter().any(|l| l.index() == e.index()))
            {
                assert_ne!(
                    Pattern::calculate(guess.word(), dropped.word()),
                    pattern,
                    "{} was dropped",
                    dropped.text()
                );
            }
        }
    }

    #[test]
    fn solves_every_hidden_word() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));

        for entry in dict.entries() {
            let result = game.run(&mut HiddenWord::new(entry.word().clone())).unwrap();
            assert!(result.solved, "{}", entry.text());
            assert_eq!(result.steps.last().unwrap().guess.index(), entry.index());
        }
    }

    #[test]
    fn candidate_counts_shrink() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::MaxSize, false));
        let result = game
            .run(&mut HiddenWord::new(Word::new("colds").unwrap()))
            .unwrap();

        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
            assert!(pair[1].candidates_before <= pair[0].candidates_before);
        }
    }

    #[test]
    fn opening_guesses_are_forced() {
        let dict = sample();
        let phono = dict.find("phono").unwrap();
        let game =
            Game::new(Selector::new(&dict, Metric::Entropy, false)).with_opening(vec![phono]);

        let result = game
            .run(&mut HiddenWord::new(Word::new("limbo").unwrap()))
            .unwrap();
        assert_eq!(result.steps[0].guess.text(), "phono");
        assert_eq!(result.steps[0].pattern, Pattern::new(2));
    }

    #[test]
    fn contradictory_feedback_is_error() {
        let dict = sample();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false));
        // only the stare/tares anagrams answer all-yellow, and never twice in a row
        let mut oracle = Scripted(vec!["yyyyy".parse().unwrap(), "yyyyy".parse().unwrap()]);

        match game.run(&mut oracle) {
            Err(SolveError::Contradiction { turn }) => assert!(turn <= 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn turn_limit_stops_game() {
        let dict = sample();
        let crane = dict.find("crane").unwrap();
        let game = Game::new(Selector::new(&dict, Metric::Entropy, false))
            .with_turns(1)
            .with_opening(vec![crane]);
        let result = game
            .run(&mut HiddenWord::new(Word::new("phono").unwrap()))
            .unwrap();
        assert_eq!(result.turns(), 1);
        assert!(!result.solved);
    }
}
