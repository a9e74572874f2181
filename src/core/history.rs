//! Guess history for callers that keep one.
//!
//! `History` stores the initial game, one snapshot per resolved guess and a
//! `GuessRecord` per guess, all in `im` persistent vectors. Adding or
//! undoing a guess returns a new `History` sharing structure with the old
//! one, so every intermediate history stays valid and cheap to hold.
//!
//! Only the initial game and the guessed letters are serialized. Snapshots
//! and records are rebuilt by replaying the guesses on deserialization.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::letter::Letter;
use super::state::{Game, GameState};
use crate::rules::make_guess;

/// One resolved guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The letter guessed.
    pub guess: Letter,

    /// State after the guess was resolved.
    pub state: GameState,

    /// Allowance after the guess was resolved.
    pub guesses_left: u32,

    /// Position in the history (0-based).
    pub sequence: usize,
}

impl GuessRecord {
    /// Create a new guess record.
    #[must_use]
    pub fn new(guess: Letter, state: GameState, guesses_left: u32, sequence: usize) -> Self {
        Self {
            guess,
            state,
            guesses_left,
            sequence,
        }
    }
}

/// Persistent list of guesses applied to one game.
///
/// ```
/// use hangman_rules::core::{Game, GameConfig, GameState, History, Letter};
///
/// let game = Game::start("ox", &GameConfig::new()).unwrap();
/// let history = History::new(game);
///
/// let after_o = history.guess(Letter::new('o').unwrap());
/// let after_x = after_o.guess(Letter::new('x').unwrap());
///
/// assert_eq!(after_x.current().state, GameState::Won);
/// assert_eq!(after_o.len(), 1); // Earlier histories are unchanged
/// assert_eq!(after_x.undo().unwrap(), after_o);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HistoryRepr", into = "HistoryRepr")]
pub struct History {
    initial: Game,

    /// Game after each recorded guess.
    snapshots: Vector<Game>,

    records: Vector<GuessRecord>,
}

impl History {
    /// Start a history at `initial`.
    #[must_use]
    pub fn new(initial: Game) -> Self {
        Self {
            initial,
            snapshots: Vector::new(),
            records: Vector::new(),
        }
    }

    /// Build a history by applying `guesses` in order.
    pub fn replay(initial: Game, guesses: impl IntoIterator<Item = Letter>) -> Self {
        guesses
            .into_iter()
            .fold(Self::new(initial), |history, guess| history.guess(guess))
    }

    /// This history plus one more guess.
    #[must_use]
    pub fn guess(&self, guess: Letter) -> Self {
        let next = make_guess(self.current(), guess);
        let record = GuessRecord::new(
            guess,
            next.state,
            next.guesses_left,
            self.records.len(),
        );

        let mut history = self.clone();
        history.snapshots.push_back(next);
        history.records.push_back(record);
        history
    }

    /// This history without its last guess, or `None` if it has no guesses.
    #[must_use]
    pub fn undo(&self) -> Option<Self> {
        if self.records.is_empty() {
            return None;
        }

        let mut history = self.clone();
        history.snapshots.pop_back();
        history.records.pop_back();
        Some(history)
    }

    /// Game after the most recent guess.
    #[must_use]
    pub fn current(&self) -> &Game {
        self.snapshots.back().unwrap_or(&self.initial)
    }

    /// Game before any guess.
    #[must_use]
    pub fn initial(&self) -> &Game {
        &self.initial
    }

    /// Recorded guesses, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &GuessRecord> {
        self.records.iter()
    }

    /// Snapshot after each guess, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Game> {
        self.snapshots.iter()
    }

    /// Number of recorded guesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no guesses were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Serialized form of a `History`: the start and the letters guessed.
#[derive(Serialize, Deserialize)]
struct HistoryRepr {
    initial: Game,
    guesses: Vec<Letter>,
}

impl From<HistoryRepr> for History {
    fn from(repr: HistoryRepr) -> Self {
        History::replay(repr.initial, repr.guesses)
    }
}

impl From<History> for HistoryRepr {
    fn from(history: History) -> Self {
        Self {
            initial: history.initial,
            guesses: history.records.iter().map(|record| record.guess).collect(),
        }
    }
}
