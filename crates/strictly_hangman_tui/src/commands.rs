//! Non-interactive subcommands.

use anyhow::{Context, Result, anyhow};
use strictly_hangman::{GameStatus, Letter, Round, RoundSnapshot, SecretWord, WordBank};
use tracing::{info, instrument};

/// Words in the built-in bank.
#[instrument]
pub fn list_words() -> &'static [&'static str] {
    WordBank::fruits().words()
}

/// Parses a guess sequence. Whitespace is skipped; anything else that is
/// not a letter is an error.
#[instrument]
pub fn parse_letters(letters: &str) -> Result<Vec<Letter>> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match Letter::from_char(c) {
            Some(letter) => Ok(letter),
            None => Err(anyhow!("'{}' is not a letter A-Z", c)),
        })
        .collect()
}

/// Replays `letters` on `word` and returns the final snapshot.
#[instrument]
pub fn replay(word: &str, letters: &str) -> Result<RoundSnapshot> {
    let secret = SecretWord::new(word).with_context(|| format!("Invalid word {:?}", word))?;
    let letters = parse_letters(letters)?;
    let round = Round::replay(secret, &letters);
    info!(status = %round.status(), guesses = round.history().len(), "Replay finished");
    Ok(round.snapshot())
}

/// Plain-text rendering of a snapshot.
#[instrument(skip(snapshot))]
pub fn describe(snapshot: &RoundSnapshot) -> String {
    let join = |letters: &[Letter]| {
        letters
            .iter()
            .map(|l| l.as_char().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut out = format!(
        "Word:      {}\nCorrect:   {}\nWrong:     {}\nRemaining: {}\nStatus:    {}\n",
        snapshot.masked_word(),
        join(snapshot.correct_letters()),
        join(snapshot.wrong_letters()),
        snapshot.remaining_attempts(),
        snapshot.status(),
    );
    if let Some(word) = snapshot.revealed_word() {
        let verdict = match snapshot.status() {
            GameStatus::Won => "You won!",
            _ => "You lost!",
        };
        out.push_str(&format!("{} The word was {}\n", verdict, word));
    }
    out
}
