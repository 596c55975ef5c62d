//! Outcome and phase types for the hangman state machine.

use serde::{Deserialize, Serialize};

/// Outcome reported to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game still accepts guesses.
    Ongoing,
    /// Every distinct letter was guessed.
    PlayerWins,
    /// Trials ran out, or the game was misconfigured.
    PlayerLoses,
}

impl GameResult {
    /// Returns true once the game has an outcome.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "Ongoing"),
            GameResult::PlayerWins => write!(f, "Player wins"),
            GameResult::PlayerLoses => write!(f, "Player loses"),
        }
    }
}

/// State machine phase.
///
/// `Misconfigured` is entered only at construction. `Won`, `Lost` and
/// `Misconfigured` have no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed with invalid parameters.
    Misconfigured,
    /// Accepting guesses.
    Ongoing,
    /// Every letter uncovered.
    Won,
    /// Trial budget exhausted.
    Lost,
}

impl Phase {
    /// Returns true for phases with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Ongoing)
    }

    /// Maps the phase to the player-facing result.
    pub fn result(&self) -> GameResult {
        match self {
            Phase::Ongoing => GameResult::Ongoing,
            Phase::Won => GameResult::PlayerWins,
            Phase::Lost | Phase::Misconfigured => GameResult::PlayerLoses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misconfigured_resolves_to_loss() {
        assert!(Phase::Misconfigured.is_terminal());
        assert_eq!(Phase::Misconfigured.result(), GameResult::PlayerLoses);
    }

    #[test]
    fn test_only_ongoing_is_undecided() {
        assert!(!Phase::Ongoing.is_terminal());
        assert!(!Phase::Ongoing.result().is_decided());
        assert!(Phase::Won.result().is_decided());
        assert_eq!(Phase::Won.result().to_string(), "Player wins");
    }
}
