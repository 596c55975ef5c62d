//! Serializable view of a game snapshot.

use crate::error::GameError;
use crate::game::Game;
use crate::phases::{GameResult, Phase};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Read-only projection of a `Game` for drivers.
///
/// The secret word is only included once the game is over, so a view of an
/// ongoing game can be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Current phase.
    pub phase: Phase,
    /// Player-facing outcome.
    pub result: GameResult,
    /// Secret with unguessed letters masked.
    pub revealed: String,
    /// Trials left.
    pub available_trials: u32,
    /// Current fault, `None` when there is nothing to report.
    pub problem: GameError,
    /// Letters that missed, in alphabetical order.
    pub misses: Vec<char>,
    /// Accepted guesses in order.
    pub history: Vec<char>,
    /// The secret word, present only when the game is over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_word: Option<String>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            result: game.result(),
            revealed: game.revealed_secret(),
            available_trials: game.available_trials(),
            problem: game.problem(),
            misses: game.misses().iter().copied().collect(),
            history: game.history().iter().map(|g| g.as_char()).collect(),
            secret_word: game.is_over().then(|| game.secret_word().to_string()),
        }
    }
}

impl Game {
    /// Projects this snapshot into a serializable view.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} trials left)", self.revealed, self.available_trials)?;
        if self.problem.is_problem() {
            write!(f, " - {}", self.problem)?;
        }
        if self.result.is_decided() {
            write!(f, " - {}", self.result)?;
        }
        Ok(())
    }
}
