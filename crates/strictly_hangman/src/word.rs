//! Secret words and the static word bank.

use super::Letter;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Candidate secret words.
const FRUITS: [&str; 30] = [
    "ABACAXI",
    "BANANA",
    "MORANGO",
    "LARANJA",
    "UVA",
    "MELANCIA",
    "GOIABA",
    "PERA",
    "MACA",
    "KIWI",
    "MANGA",
    "CAJU",
    "ACEROLA",
    "PITANGA",
    "JABUTICABA",
    "CARAMBOLA",
    "FIGO",
    "LIMAO",
    "MARACUJA",
    "MELAO",
    "TANGERINA",
    "AMORA",
    "FRAMBOESA",
    "CEREJA",
    "DAMASCO",
    "PESSEGO",
    "AMEIXA",
    "NECTARINA",
    "JACA",
    "ROMA",
];

const _: () = assert!(!FRUITS.is_empty(), "word bank must not be empty");

/// Error building a [`SecretWord`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordError {
    /// The word has no letters.
    #[display("Secret word is empty")]
    Empty,

    /// The word contains something other than `A`-`Z`.
    #[display("Secret word contains invalid character {:?}", _0)]
    InvalidCharacter(char),
}

impl std::error::Error for WordError {}

/// The word a round is played on.
///
/// Always non-empty and made only of [`Letter`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord {
    letters: Vec<Letter>,
}

impl SecretWord {
    /// Parses a secret word. Lowercase input is accepted and uppercased.
    #[instrument]
    pub fn new(text: &str) -> Result<Self, WordError> {
        let letters = text
            .chars()
            .map(|c| Letter::from_char(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { letters })
    }

    /// Letters of the word in order, repeats included.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Distinct letters of the word.
    pub fn distinct_letters(&self) -> BTreeSet<Letter> {
        self.letters.iter().copied().collect()
    }

    /// Returns true if the letter occurs anywhere in the word.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of letters, repeats included.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for SecretWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SecretWord {
    type Error = WordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.to_string()
    }
}

/// Fixed set of candidate secret words.
///
/// The bank is immutable for the process lifetime and never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBank {
    words: &'static [&'static str],
}

impl WordBank {
    /// The built-in fruit bank.
    pub const fn fruits() -> Self {
        Self { words: &FRUITS }
    }

    /// All candidate words.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Number of candidate words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for the built-in bank.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws a secret word uniformly at random.
    #[instrument(skip(self, rng))]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretWord {
        let text = self.words.choose(rng).copied().unwrap_or(FRUITS[0]);
        debug!(length = text.len(), "Secret word drawn");
        SecretWord {
            letters: text.bytes().filter_map(|b| Letter::from_char(b as char)).collect(),
        }
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::fruits()
    }
}
