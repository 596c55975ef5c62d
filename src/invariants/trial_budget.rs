//! Trial budget invariant: spent trials never exceed the configured budget.

use super::Invariant;
use crate::game::{Game, Setup};

/// Invariant: consumed trials stay within the budget.
///
/// Every distinct accepted letter, hit or miss, spends one trial. A
/// misconfigured game has no budget at all, so it must have no guesses.
#[derive(Debug, Clone, Copy)]
pub struct TrialBudgetInvariant;

impl Invariant<Game> for TrialBudgetInvariant {
    fn holds(game: &Game) -> bool {
        match game.setup() {
            Setup::Misconfigured(_) => game.consumed_trials() == 0,
            Setup::WellFormed => i64::try_from(game.consumed_trials())
                .is_ok_and(|used| used <= i64::from(game.trials())),
        }
    }

    fn description() -> &'static str {
        "Consumed trials never exceed the trial budget"
    }
}
