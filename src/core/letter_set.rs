//! Sets of letters as a 26-bit bitset.
//!
//! Bit `i` is set when the letter with index `i` is a member. Union,
//! membership and subset checks are single integer operations, and the
//! whole set is `Copy`, so games built from it are cheap value types.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::letter::{Letter, ALPHABET_LEN};

const ALL_BITS: u32 = (1 << ALPHABET_LEN) - 1;

/// An unordered set of letters.
///
/// ```
/// use hangman_rules::core::{Letter, LetterSet};
///
/// let word = LetterSet::from_word("banana").unwrap();
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.to_string(), "abn");
///
/// let guessed = LetterSet::new().with(Letter::new('a').unwrap());
/// assert!(guessed.is_subset(&word));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Letter>", into = "Vec<Letter>")]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// The set of every letter `a..=z`.
    #[must_use]
    pub const fn full() -> Self {
        Self(ALL_BITS)
    }

    /// Build a set from letters.
    pub fn from_letters(letters: impl IntoIterator<Item = Letter>) -> Self {
        letters.into_iter().collect()
    }

    /// The distinct letters of a word.
    ///
    /// Every character must be an ASCII letter; case is folded.
    pub fn from_word(word: &str) -> Result<Self, GameError> {
        word.chars().map(Letter::new).collect()
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// This set plus one letter.
    #[must_use]
    pub const fn with(self, letter: Letter) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    /// Add a letter in place.
    ///
    /// Returns true if the letter was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let added = !self.contains(letter);
        self.0 |= Self::bit(letter);
        added
    }

    /// Letters in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every letter of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of letters in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if the set has no letters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over members in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(move |&letter| self.contains(letter))
    }

    const fn bit(letter: Letter) -> u32 {
        1 << letter.index()
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl Extend<Letter> for LetterSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl From<Vec<Letter>> for LetterSet {
    fn from(letters: Vec<Letter>) -> Self {
        letters.into_iter().collect()
    }
}

impl From<LetterSet> for Vec<Letter> {
    fn from(set: LetterSet) -> Self {
        set.iter().collect()
    }
}

impl std::fmt::Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
