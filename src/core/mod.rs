//! Core types: letters, letter sets, game snapshots, configuration, history.
//!
//! Everything here is a plain value. The rules in `crate::rules` read these
//! types and build new ones; nothing is mutated in place.

pub mod letter;
pub mod letter_set;
pub mod state;
pub mod config;
pub mod history;
pub mod error;

pub use letter::{Letter, ALPHABET_LEN};
pub use letter_set::LetterSet;
pub use state::{Game, GameState};
pub use config::{GameConfig, DEFAULT_MAX_WRONG_GUESSES};
pub use history::{GuessRecord, History};
pub use error::GameError;
