//! Game configuration.

use crate::error::ConfigError;
use crate::rules::{LetterMatching, SecretWordPolicy};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Parameters a game is started from.
///
/// A config carrying an empty word or a non-positive budget is still a
/// valid config; it simply starts a misconfigured game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Word the player must uncover.
    secret_word: String,

    /// Number of misses allowed.
    trials: i32,

    /// Minimum-length rule for the secret word.
    #[serde(default)]
    policy: SecretWordPolicy,

    /// Case rule used when matching guesses.
    #[serde(default)]
    matching: LetterMatching,
}

impl GameConfig {
    /// Creates a configuration with the default policy and matching.
    #[instrument(skip(secret_word))]
    pub fn new(secret_word: impl Into<String>, trials: i32) -> Self {
        Self {
            secret_word: secret_word.into(),
            trials,
            policy: SecretWordPolicy::default(),
            matching: LetterMatching::default(),
        }
    }

    /// Replaces the secret word policy.
    pub fn with_policy(mut self, policy: SecretWordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the letter matching rule.
    pub fn with_matching(mut self, matching: LetterMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Parses configuration from a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(trials = config.trials, policy = ?config.policy, "Config loaded successfully");
        Ok(config)
    }
}
