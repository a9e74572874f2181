//! # hangman-rules
//!
//! Turn resolution for hangman: given a game snapshot and one guessed
//! letter, compute the next snapshot.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `make_guess` reads its arguments and returns a
//!    new `Game`. No I/O, no shared state, no failure modes.
//!
//! 2. **Ordered Rules**: Guesses are resolved by the first matching rule
//!    (game over, repeat, win, loss, good, bad). The order is the contract.
//!
//! 3. **Values All The Way Down**: `Letter`, `LetterSet` and `Game` are
//!    `Copy`. Callers keep whichever snapshots they want; `History` keeps
//!    them all using `im` persistent vectors.
//!
//! Word lists, rendering and the guess loop belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Letters, letter sets, game snapshots, configuration, history, errors
//! - `rules`: `make_guess`, its predicates, and `GameResult`
//!
//! ## Example
//!
//! ```
//! use hangman_rules::{Game, GameConfig, GameResult, Letter};
//!
//! let mut game = Game::start("abba", &GameConfig::new()).unwrap();
//! for c in ['a', 'x', 'b'] {
//!     game = game.guess(Letter::new(c).unwrap());
//! }
//!
//! assert_eq!(game.result(), Some(GameResult::Won));
//! assert_eq!(game.guesses_left, 5);
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Letter, LetterSet,
    Game, GameState,
    GameConfig, GameError,
    GuessRecord, History,
};

pub use crate::rules::{classify, make_guess, GameResult};
