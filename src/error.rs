//! Game fault taxonomy and ambient error types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Validation and configuration faults.
///
/// Faults are values: the game folds them into its `problem()` query
/// instead of returning them as `Err`. `None` is the explicit "no fault"
/// answer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum GameError {
    /// No fault recorded.
    #[default]
    #[display("No problem")]
    None,

    /// Trial budget was zero or negative.
    #[display("Trials must be positive")]
    TrialsMustBePositive,

    /// Secret word was empty under the permissive policy.
    #[display("Secret word must have at least one letter")]
    SecretWordMustHaveAtLeastOneLetter,

    /// Secret word was shorter than three characters under the strict policy.
    #[display("Secret word must have three letters")]
    SecretWordMustHaveThreeLetters,

    /// Guess was not exactly one character.
    #[display("Multiple letters not allowed")]
    MultipleLettersNotAllowed,

    /// Guess was not an ASCII letter.
    #[display("Invalid character, only letters a to z are allowed")]
    InvalidCharacter,
}

impl GameError {
    /// Returns true for every value except `None`.
    pub fn is_problem(&self) -> bool {
        !matches!(self, GameError::None)
    }

    /// Returns true if the fault comes from game construction.
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            GameError::TrialsMustBePositive
                | GameError::SecretWordMustHaveAtLeastOneLetter
                | GameError::SecretWordMustHaveThreeLetters
        )
    }

    /// Returns true if the fault comes from a rejected guess.
    pub fn is_guess_fault(&self) -> bool {
        matches!(
            self,
            GameError::MultipleLettersNotAllowed | GameError::InvalidCharacter
        )
    }
}

/// Configuration loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
