//! Turn resolution for hangman.
//!
//! `make_guess` is the only transition: it takes a `Game` snapshot and a
//! letter and returns the next snapshot. Predicates are exposed so callers
//! can ask what a guess would do; `classify` answers the same question as a
//! `GameState` without building the next game.

pub mod outcome;
pub mod resolver;

pub use outcome::GameResult;
pub use resolver::{
    classify, is_already_guessed, is_game_over, is_good_guess, is_losing_guess, is_winning_guess,
    make_guess,
};
