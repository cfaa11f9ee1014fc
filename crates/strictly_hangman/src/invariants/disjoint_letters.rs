//! Disjoint letters invariant: a letter is classified exactly once.

use super::super::Round;
use super::Invariant;

/// Invariant: no letter is both correct and wrong.
pub struct DisjointLettersInvariant;

impl Invariant<Round> for DisjointLettersInvariant {
    fn holds(round: &Round) -> bool {
        round.correct.is_disjoint(&round.wrong)
    }

    fn description() -> &'static str {
        "Correct and wrong letters are disjoint"
    }
}
