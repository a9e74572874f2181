//! Game snapshots.
//!
//! ## GameState
//!
//! Closed tag describing the last transition:
//! - `NotStarted`: freshly constructed, no guess made yet
//! - `GoodGuess`, `BadGuess`, `AlreadyGuessed`: game continues
//! - `Won`, `Lost`: terminal, absorbs every further guess
//!
//! ## Game
//!
//! One round's progress as a plain `Copy` value. Transitions never mutate a
//! `Game`; `make_guess` returns a new snapshot and the caller decides what
//! to keep.

use serde::{Deserialize, Serialize};

use super::letter::Letter;
use super::letter_set::LetterSet;
use crate::rules::{make_guess, GameResult};

/// Tag for the most recent transition of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// No guess has been resolved yet.
    #[default]
    NotStarted,
    /// The last guess was a new letter of the word.
    GoodGuess,
    /// The last guess was a new letter not in the word.
    BadGuess,
    /// The last guess had been guessed before.
    AlreadyGuessed,
    /// Every letter of the word has been guessed.
    Won,
    /// The wrong-guess allowance ran out.
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::NotStarted => "not_started",
            GameState::GoodGuess => "good_guess",
            GameState::BadGuess => "bad_guess",
            GameState::AlreadyGuessed => "already_guessed",
            GameState::Won => "won",
            GameState::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Immutable snapshot of one hangman round.
///
/// ```
/// use hangman_rules::core::{Game, GameState, Letter, LetterSet};
///
/// let game = Game::new(LetterSet::from_word("hi").unwrap(), 3);
/// let next = game.guess(Letter::new('h').unwrap());
///
/// assert_eq!(next.state, GameState::GoodGuess);
/// assert_eq!(game.state, GameState::NotStarted); // Original untouched
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    /// Tag of the most recent transition.
    pub state: GameState,

    /// Letters guessed so far. Only ever grows.
    pub guessed: LetterSet,

    /// Distinct letters of the secret word. Fixed for the game's lifetime.
    pub letters: LetterSet,

    /// Wrong guesses still allowed before the game is lost.
    pub guesses_left: u32,
}

impl Game {
    /// Create a game that has not started.
    ///
    /// No validation is done; see `Game::start` for the checked path.
    #[must_use]
    pub const fn new(letters: LetterSet, guesses_left: u32) -> Self {
        Self {
            state: GameState::NotStarted,
            guessed: LetterSet::new(),
            letters,
            guesses_left,
        }
    }

    /// Replace the state tag.
    #[must_use]
    pub const fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    /// Replace the guessed set.
    #[must_use]
    pub const fn with_guessed(mut self, guessed: LetterSet) -> Self {
        self.guessed = guessed;
        self
    }

    /// Replace the remaining wrong-guess allowance.
    #[must_use]
    pub const fn with_guesses_left(mut self, guesses_left: u32) -> Self {
        self.guesses_left = guesses_left;
        self
    }

    /// True once the game is won or lost.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Final result, if the game is over.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::Won => Some(GameResult::Won),
            GameState::Lost => Some(GameResult::Lost),
            _ => None,
        }
    }

    /// Letters of the word not yet guessed.
    #[must_use]
    pub const fn remaining_letters(&self) -> LetterSet {
        self.letters.difference(self.guessed)
    }

    /// Apply one guess. Same as `rules::make_guess(self, guess)`.
    #[must_use]
    pub fn guess(&self, guess: Letter) -> Game {
        make_guess(self, guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_new() {
        let letters = LetterSet::from_word("cat").unwrap();
        let game = Game::new(letters, 6);

        assert_eq!(game.state, GameState::NotStarted);
        assert!(game.guessed.is_empty());
        assert_eq!(game.letters, letters);
        assert_eq!(game.guesses_left, 6);
        assert!(!game.is_terminal());
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());

        for state in [
            GameState::NotStarted,
            GameState::GoodGuess,
            GameState::BadGuess,
            GameState::AlreadyGuessed,
        ] {
            assert!(!state.is_terminal(), "{} should not be terminal", state);
        }
    }

    #[test]
    fn test_result() {
        let game = Game::default();
        assert_eq!(game.with_state(GameState::Won).result(), Some(GameResult::Won));
        assert_eq!(game.with_state(GameState::Lost).result(), Some(GameResult::Lost));
        assert_eq!(game.with_state(GameState::BadGuess).result(), None);
    }

    #[test]
    fn test_remaining_letters() {
        let game = Game::new(LetterSet::from_word("dog").unwrap(), 3)
            .with_guessed(LetterSet::from_word("oz").unwrap());

        assert_eq!(game.remaining_letters().to_string(), "dg");
    }

    #[test]
    fn test_builders_copy() {
        let game = Game::new(LetterSet::from_word("a").unwrap(), 1);
        let lost = game.with_state(GameState::Lost).with_guesses_left(0);

        assert_eq!(game.state, GameState::NotStarted);
        assert_eq!(game.guesses_left, 1);
        assert_eq!(lost.state, GameState::Lost);
        assert_eq!(lost.guesses_left, 0);
    }

    #[test]
    fn test_state_display_matches_serde() {
        for state in [
            GameState::NotStarted,
            GameState::GoodGuess,
            GameState::BadGuess,
            GameState::AlreadyGuessed,
            GameState::Won,
            GameState::Lost,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state));
        }
    }

    #[test]
    fn test_game_serialization() {
        let game = Game::new(LetterSet::from_word("ab").unwrap(), 4)
            .with_state(GameState::BadGuess)
            .with_guessed(LetterSet::from_word("z").unwrap());

        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(
            json,
            r#"{"state":"bad_guess","guessed":["z"],"letters":["a","b"],"guesses_left":4}"#
        );

        let deserialized: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, deserialized);
    }
}
