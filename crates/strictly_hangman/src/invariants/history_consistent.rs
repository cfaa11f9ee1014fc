//! History consistency invariant: the guess log matches the letter sets.

use super::super::Round;
use super::Invariant;
use std::collections::BTreeSet;

/// Invariant: history has no repeats and holds exactly the classified
/// letters, each in the set its occurrence in the word implies.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let mut seen = BTreeSet::new();
        for letter in &round.history {
            if !seen.insert(*letter) {
                return false;
            }
            let expected = if round.secret.contains(*letter) {
                &round.correct
            } else {
                &round.wrong
            };
            if !expected.contains(letter) {
                return false;
            }
        }

        seen.len() == round.correct.len() + round.wrong.len()
    }

    fn description() -> &'static str {
        "History matches the classified letters"
    }
}
