//! Strictly Hangman - type-safe rules engine for a word-guessing game
//!
//! Given a secret word and a trial budget, the engine tracks guesses,
//! decides when the game is over, and reports the outcome together with
//! any configuration or guess faults. It performs no input/output of its
//! own; a driver feeds it raw input and renders the snapshots it returns.
//!
//! # Architecture
//!
//! - **Either**: two-branch container carrying a fault or a value
//! - **Guess**: validates raw input into a single letter
//! - **Rules**: pure functions for word policy, matching and reveal mask
//! - **Game**: immutable snapshots, one per turn
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{Game, GameError, GameResult, Guess};
//!
//! let game = Game::start("cat", 5);
//! let game = game.try_to(Guess::letter("1"));
//! assert_eq!(game.problem(), GameError::InvalidCharacter);
//!
//! let game = game.try_to(Guess::letter("a"));
//! assert_eq!(game.revealed_secret(), "_a_");
//! assert_eq!(game.available_trials(), 4);
//!
//! let game = game.try_to(Guess::letter("c")).try_to(Guess::letter("t"));
//! assert_eq!(game.result(), GameResult::PlayerWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod either;
mod error;
mod game;
mod guess;
mod phases;
mod wrapper;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Core model
pub use either::Either;
pub use error::{ConfigError, GameError};
pub use game::{start_game, Game, Setup};
pub use guess::Guess;
pub use phases::{GameResult, Phase};

// Crate-level exports - Configuration
pub use config::GameConfig;
pub use rules::{LetterMatching, SecretWordPolicy, PLACEHOLDER};

// Crate-level exports - Driver view
pub use wrapper::GameView;
