//! Letters of the guessing alphabet.
//!
//! A `Letter` is one of the 26 lowercase ASCII letters, stored as its
//! 0-based position in the alphabet. Uppercase input is folded to lowercase
//! on construction, so `'A'` and `'a'` are the same guess.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of letters in the guessing alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// A single letter `a..=z`.
///
/// Serializes as a one-character string.
///
/// ```
/// use hangman_rules::core::Letter;
///
/// let a = Letter::new('A').unwrap();
/// assert_eq!(a.as_char(), 'a');
/// assert_eq!(a.index(), 0);
/// assert!(Letter::new('?').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, folding ASCII uppercase.
    pub fn new(c: char) -> Result<Self, GameError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            Err(GameError::InvalidLetter(c))
        }
    }

    /// Create a letter from its alphabet index (`0` is `a`).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Position in the alphabet (0-based).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The lowercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterate over the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
