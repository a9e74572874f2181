//! Property tests for guess resolution.

use hangman_rules::core::{Game, GameState, History, Letter, LetterSet};
use hangman_rules::rules::{classify, make_guess};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn letter() -> impl Strategy<Value = Letter> {
    (0u8..26).prop_map(|i| Letter::from_index(i).unwrap())
}

fn letter_set() -> impl Strategy<Value = LetterSet> {
    prop::collection::vec(letter(), 0..26).prop_map(LetterSet::from_letters)
}

fn game_state() -> impl Strategy<Value = GameState> {
    prop_oneof![
        Just(GameState::NotStarted),
        Just(GameState::GoodGuess),
        Just(GameState::BadGuess),
        Just(GameState::AlreadyGuessed),
        Just(GameState::Won),
        Just(GameState::Lost),
    ]
}

fn game() -> impl Strategy<Value = Game> {
    (game_state(), letter_set(), letter_set(), 0u32..10).prop_map(
        |(state, guessed, letters, guesses_left)| {
            Game::new(letters, guesses_left)
                .with_state(state)
                .with_guessed(guessed)
        },
    )
}

/// A fresh game for a non-empty word with at least one allowance.
fn fresh_game() -> impl Strategy<Value = Game> {
    (prop::collection::vec(letter(), 1..12), 1u32..8)
        .prop_map(|(word, guesses_left)| Game::new(LetterSet::from_letters(word), guesses_left))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn terminal_games_ignore_guesses(g in game(), guess in letter(), won in any::<bool>()) {
        let state = if won { GameState::Won } else { GameState::Lost };
        let g = g.with_state(state);

        prop_assert_eq!(make_guess(&g, guess), g);
    }

    #[test]
    fn guessed_and_allowance_are_monotonic(g in game(), guess in letter()) {
        let next = make_guess(&g, guess);

        prop_assert!(g.guessed.is_subset(&next.guessed));
        prop_assert!(next.guesses_left <= g.guesses_left);
        prop_assert!(g.guesses_left - next.guesses_left <= 1);
    }

    #[test]
    fn letters_never_change(g in game(), guess in letter()) {
        prop_assert_eq!(make_guess(&g, guess).letters, g.letters);
    }

    #[test]
    fn repeat_guess_only_changes_state(g in game(), guess in letter()) {
        prop_assume!(!g.is_terminal());
        let g = g.with_guessed(g.guessed.with(guess));

        prop_assert_eq!(make_guess(&g, guess), g.with_state(GameState::AlreadyGuessed));
    }

    #[test]
    fn new_guess_is_recorded(g in game(), guess in letter()) {
        prop_assume!(!g.is_terminal() && !g.guessed.contains(guess));
        let next = make_guess(&g, guess);

        prop_assert_eq!(next.guessed, g.guessed.with(guess));
    }

    #[test]
    fn allowance_only_drops_on_wrong_guess(g in game(), guess in letter()) {
        let next = make_guess(&g, guess);

        if next.guesses_left < g.guesses_left {
            prop_assert!(!g.letters.contains(guess));
            prop_assert!(matches!(next.state, GameState::BadGuess | GameState::Lost));
        }
    }

    #[test]
    fn classify_agrees_with_make_guess(g in game(), guess in letter()) {
        prop_assert_eq!(classify(&g, guess), make_guess(&g, guess).state);
    }

    #[test]
    fn guessing_the_alphabet_ends_the_game(
        g in fresh_game(),
        order in Just(Letter::all().collect::<Vec<_>>()).prop_shuffle()
    ) {
        let end = order.iter().fold(g, |game, &guess| make_guess(&game, guess));

        prop_assert!(end.is_terminal());
        if end.state == GameState::Won {
            prop_assert!(g.letters.is_subset(&end.guessed));
        } else {
            prop_assert_eq!(end.guesses_left, 0);
        }
    }

    #[test]
    fn history_is_a_fold(g in game(), guesses in prop::collection::vec(letter(), 0..20)) {
        let history = History::replay(g, guesses.iter().copied());
        let folded = guesses.iter().fold(g, |game, &guess| make_guess(&game, guess));

        prop_assert_eq!(history.current(), &folded);
        prop_assert_eq!(history.len(), guesses.len());

        if let Some(undone) = history.undo() {
            let shorter = History::replay(g, guesses[..guesses.len() - 1].iter().copied());
            prop_assert_eq!(undone, shorter);
        }
    }
}
