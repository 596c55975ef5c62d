//! First-class invariants for hangman.
//!
//! Invariants are logical properties that must hold for every reachable
//! snapshot. `Game::try_to` checks them after each transition in debug
//! builds, and they can be tested independently.

use crate::game::Game;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod history_consistent;
pub mod partitioned_guesses;
pub mod trial_budget;

pub use history_consistent::HistoryConsistentInvariant;
pub use partitioned_guesses::PartitionedGuessesInvariant;
pub use trial_budget::TrialBudgetInvariant;

/// All hangman invariants as a composable set.
pub type HangmanInvariants = (
    TrialBudgetInvariant,
    PartitionedGuessesInvariant,
    HistoryConsistentInvariant,
);

/// Checks every hangman invariant, logging and asserting on violation.
///
/// The assertion only fires in debug builds.
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = HangmanInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(false, "Invariant violation: {:?}", violations);
    }
}
