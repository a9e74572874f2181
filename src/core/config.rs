//! Game configuration and checked construction.
//!
//! `GameConfig` describes how a fresh game is set up. `Game::start` turns a
//! secret word and a config into a `NotStarted` game, rejecting inputs the
//! transition rules do not handle (non-letters, empty words, zero allowance).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GameError;
use super::letter_set::LetterSet;
use super::state::Game;

/// Default wrong-guess allowance: head, torso, two arms, two legs.
pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 6;

/// Setup parameters for a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost.
    pub max_wrong_guesses: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrong-guess allowance.
    #[must_use]
    pub fn with_max_wrong_guesses(mut self, max: u32) -> Self {
        self.max_wrong_guesses = max;
        self
    }

    /// Check that a game can be built from this config.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_wrong_guesses == 0 {
            return Err(GameError::NoGuesses);
        }
        Ok(())
    }
}

impl Game {
    /// Start a game for `word` using `config`.
    ///
    /// The word must be non-empty and made only of ASCII letters (any case).
    ///
    /// ```
    /// use hangman_rules::core::{Game, GameConfig, GameError, GameState};
    ///
    /// let game = Game::start("Rust", &GameConfig::new()).unwrap();
    /// assert_eq!(game.state, GameState::NotStarted);
    /// assert_eq!(game.letters.to_string(), "rstu");
    /// assert_eq!(game.guesses_left, 6);
    ///
    /// assert_eq!(Game::start("", &GameConfig::new()), Err(GameError::EmptyWord));
    /// ```
    pub fn start(word: &str, config: &GameConfig) -> Result<Self, GameError> {
        let result = config.validate().and_then(|()| {
            let letters = LetterSet::from_word(word)?;
            if letters.is_empty() {
                return Err(GameError::EmptyWord);
            }
            Ok(Game::new(letters, config.max_wrong_guesses))
        });

        match &result {
            Ok(game) => debug!(
                distinct_letters = game.letters.len(),
                guesses_left = game.guesses_left,
                "started game"
            ),
            Err(err) => debug!(%err, "rejected game setup"),
        }

        result
    }
}
