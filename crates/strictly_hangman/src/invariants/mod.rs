//! First-class invariants for hangman rounds.
//!
//! Invariants are logical properties that must hold after every guess.
//! They are testable on their own and document what a [`Round`] guarantees.

use super::Round;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod bounded_mistakes;
pub mod disjoint_letters;
pub mod history_consistent;
pub mod status_consistent;

pub use bounded_mistakes::BoundedMistakesInvariant;
pub use disjoint_letters::DisjointLettersInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All hangman invariants as a composable set.
pub type HangmanInvariants = (
    DisjointLettersInvariant,
    BoundedMistakesInvariant,
    StatusConsistentInvariant,
    HistoryConsistentInvariant,
);

/// Checks every hangman invariant on a round.
pub fn check_round(round: &Round) -> Result<(), Vec<InvariantViolation>> {
    HangmanInvariants::check_all(round)
}
