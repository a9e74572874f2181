//! Errors raised while building games and letters.
//!
//! Resolving a guess never fails; only the construction paths
//! (`Letter::new`, `LetterSet::from_word`, `Game::start`) return these.

use thiserror::Error;

/// Errors from constructing letters, words and games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The character is not an ASCII letter.
    #[error("'{0}' is not a letter in a-z")]
    InvalidLetter(char),

    /// The secret word has no letters to guess.
    #[error("secret word contains no letters")]
    EmptyWord,

    /// The game would start with no wrong-guess allowance.
    #[error("a game needs at least one wrong guess allowed")]
    NoGuesses,
}
