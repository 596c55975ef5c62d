//! History consistency invariant: guess sets are derivable from history.

use super::Invariant;
use crate::game::Game;
use std::collections::BTreeSet;

/// Invariant: hits and misses are exactly the normalized letters in history.
///
/// A misconfigured game never accepts a guess, so its history is empty.
#[derive(Debug, Clone, Copy)]
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        if game.is_misconfigured() && !game.history().is_empty() {
            return false;
        }

        let replayed: BTreeSet<char> = game
            .history()
            .iter()
            .map(|g| game.matching().normalize(g.as_char()))
            .collect();
        let recorded: BTreeSet<char> = game.hits().union(game.misses()).copied().collect();

        replayed == recorded
    }

    fn description() -> &'static str {
        "Hits and misses match the guess history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Guess, LetterMatching, GameConfig};

    #[test]
    fn test_repeated_guesses_hold() {
        let game = Game::start("cat", 5)
            .try_to(Guess::letter("a"))
            .try_to(Guess::letter("a"))
            .try_to(Guess::letter("x"));
        assert_eq!(game.history().len(), 3);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_ignore_case_history_holds() {
        let config = GameConfig::new("cat", 5).with_matching(LetterMatching::IgnoreCase);
        let game = Game::replay(&config, ["C", "c", "X"]);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_hit_violates() {
        let mut game = Game::start("cat", 5);
        game.hits.insert('c');
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
