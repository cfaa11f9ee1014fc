//! Letter enum for hangman guesses.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// An uppercase ASCII letter (`A`-`Z`).
///
/// This is the only thing a player can guess. The on-screen keyboard
/// offers exactly these 26 keys, so a malformed guess cannot be
/// represented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Parses a letter from a character, ignoring case.
    ///
    /// Returns `None` for anything outside `a-z`/`A-Z`.
    #[instrument]
    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Self::from_index(index)
    }

    /// Creates a letter from its alphabet index (`A` = 0).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Alphabet index of this letter (`A` = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The uppercase character for this letter.
    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}
