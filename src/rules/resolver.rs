//! Guess resolution.
//!
//! `make_guess` checks a fixed list of predicates in order and hands the
//! first match to its consequent:
//!
//! 1. game already over → unchanged
//! 2. letter already guessed → `AlreadyGuessed`
//! 3. guess completes the word → `Won`
//! 4. wrong guess with one allowance left → `Lost`
//! 5. letter in the word → `GoodGuess`
//! 6. otherwise → `BadGuess`
//!
//! A single letter can satisfy several predicates at once (a winning guess
//! is also a good guess), so the order is the behavior.

use tracing::{instrument, trace};

use crate::core::{Game, GameState, Letter};

/// Apply one guess to a game and return the next snapshot.
///
/// Total and pure: every input has an output, and `game` is never modified.
///
/// ```
/// use hangman_rules::core::{Game, GameState, Letter, LetterSet};
/// use hangman_rules::rules::make_guess;
///
/// let game = Game::new(LetterSet::from_word("a").unwrap(), 3);
/// let next = make_guess(&game, Letter::new('b').unwrap());
///
/// assert_eq!(next.state, GameState::BadGuess);
/// assert_eq!(next.guesses_left, 2);
/// ```
#[instrument(level = "trace")]
#[must_use]
pub fn make_guess(game: &Game, guess: Letter) -> Game {
    let next = if is_game_over(game) {
        *game
    } else if is_already_guessed(game, guess) {
        already_guessed(game)
    } else if is_winning_guess(game, guess) {
        win(game, guess)
    } else if is_losing_guess(game, guess) {
        lose(game, guess)
    } else if is_good_guess(game, guess) {
        good_guess(game, guess)
    } else {
        bad_guess(game, guess)
    };

    trace!(state = %next.state, guesses_left = next.guesses_left, "resolved guess");
    next
}

/// The state `make_guess` would produce, without building the new game.
#[must_use]
pub fn classify(game: &Game, guess: Letter) -> GameState {
    if is_game_over(game) {
        game.state
    } else if is_already_guessed(game, guess) {
        GameState::AlreadyGuessed
    } else if is_winning_guess(game, guess) {
        GameState::Won
    } else if is_losing_guess(game, guess) {
        GameState::Lost
    } else if is_good_guess(game, guess) {
        GameState::GoodGuess
    } else {
        GameState::BadGuess
    }
}

// === Predicates ===

/// The game is won or lost.
#[must_use]
pub fn is_game_over(game: &Game) -> bool {
    game.state.is_terminal()
}

/// The letter was guessed before.
#[must_use]
pub fn is_already_guessed(game: &Game, guess: Letter) -> bool {
    game.guessed.contains(guess)
}

/// Adding `guess` covers every letter of the word.
///
/// This is a containment check on `guessed ∪ {guess}`, not a membership
/// check on `guess`.
#[must_use]
pub fn is_winning_guess(game: &Game, guess: Letter) -> bool {
    game.letters.is_subset(&game.guessed.with(guess))
}

/// A wrong guess that uses up the last allowance.
#[must_use]
pub fn is_losing_guess(game: &Game, guess: Letter) -> bool {
    !game.letters.contains(guess) && game.guesses_left == 1
}

/// The letter is in the word.
#[must_use]
pub fn is_good_guess(game: &Game, guess: Letter) -> bool {
    game.letters.contains(guess)
}

// === Consequents ===

fn already_guessed(game: &Game) -> Game {
    game.with_state(GameState::AlreadyGuessed)
}

fn win(game: &Game, guess: Letter) -> Game {
    game.with_state(GameState::Won).with_guessed(game.guessed.with(guess))
}

fn lose(game: &Game, guess: Letter) -> Game {
    game.with_state(GameState::Lost)
        .with_guessed(game.guessed.with(guess))
        .with_guesses_left(0)
}

fn good_guess(game: &Game, guess: Letter) -> Game {
    game.with_state(GameState::GoodGuess).with_guessed(game.guessed.with(guess))
}

fn bad_guess(game: &Game, guess: Letter) -> Game {
    // Saturates for a malformed non-terminal game with no allowance left
    game.with_state(GameState::BadGuess)
        .with_guessed(game.guessed.with(guess))
        .with_guesses_left(game.guesses_left.saturating_sub(1))
}
