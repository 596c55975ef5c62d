//! Partitioned guesses invariant: hits are secret letters, misses are not.

use super::Invariant;
use crate::game::Game;
use crate::rules;

/// Invariant: hits and misses partition the guessed letters.
///
/// Every hit is a letter of the secret word and no miss is, which also
/// makes the two sets disjoint.
#[derive(Debug, Clone, Copy)]
pub struct PartitionedGuessesInvariant;

impl Invariant<Game> for PartitionedGuessesInvariant {
    fn holds(game: &Game) -> bool {
        let letters = rules::distinct_letters(game.secret_word(), game.matching());
        game.hits().is_subset(&letters) && game.misses().is_disjoint(&letters)
    }

    fn description() -> &'static str {
        "Hits are letters of the secret word and misses are not"
    }
}
