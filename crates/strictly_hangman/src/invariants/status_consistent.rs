//! Status consistency invariant.

use super::super::{Round, rules};
use super::Invariant;

/// Invariant: the stored status is what the rules say it should be.
pub struct StatusConsistentInvariant;

impl Invariant<Round> for StatusConsistentInvariant {
    fn holds(round: &Round) -> bool {
        round.status == rules::evaluate(&round.secret, &round.correct, &round.wrong)
    }

    fn description() -> &'static str {
        "Status matches the rules for the current letter sets"
    }
}
