//! Outcome of a finished game.

use serde::{Deserialize, Serialize};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// The whole word was guessed.
    Won,
    /// The wrong-guess allowance ran out.
    Lost,
}

impl GameResult {
    /// Check if the game was won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GameResult::Won)
    }
}
