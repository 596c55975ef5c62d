//! Secret word length policy and letter matching.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimum-length rule applied to the secret word at game start.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SecretWordPolicy {
    /// At least one character.
    Permissive,
    /// At least three characters.
    #[default]
    ThreeLetters,
}

impl SecretWordPolicy {
    /// Shortest secret word this policy accepts, in characters.
    pub fn min_len(&self) -> usize {
        match self {
            SecretWordPolicy::Permissive => 1,
            SecretWordPolicy::ThreeLetters => 3,
        }
    }

    /// Fault reported when the secret word is too short.
    pub fn fault(&self) -> GameError {
        match self {
            SecretWordPolicy::Permissive => GameError::SecretWordMustHaveAtLeastOneLetter,
            SecretWordPolicy::ThreeLetters => GameError::SecretWordMustHaveThreeLetters,
        }
    }

    /// Checks the secret word, returning the fault if it is too short.
    #[instrument(skip(secret_word), fields(len = secret_word.chars().count()))]
    pub fn check(&self, secret_word: &str) -> Option<GameError> {
        (secret_word.chars().count() < self.min_len()).then(|| self.fault())
    }
}

/// How a guessed letter is compared with the letters of the secret word.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum LetterMatching {
    /// `a` only matches `a`.
    #[default]
    Exact,
    /// `a` matches `a` and `A`.
    IgnoreCase,
}

impl LetterMatching {
    /// Maps a letter to the key used for set membership.
    pub fn normalize(&self, letter: char) -> char {
        match self {
            LetterMatching::Exact => letter,
            LetterMatching::IgnoreCase => letter.to_ascii_lowercase(),
        }
    }

    /// Returns true if the two letters are the same under this rule.
    pub fn matches(&self, a: char, b: char) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}
