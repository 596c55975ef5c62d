//! Game rules for hangman.
//!
//! This module contains pure functions over a secret word and the set of
//! letters guessed so far. Rules are kept apart from the `Game` snapshot so
//! invariants can re-derive state from them.

pub mod policy;
pub mod reveal;

pub use policy::{LetterMatching, SecretWordPolicy};
pub use reveal::{all_letters_guessed, distinct_letters, reveal, PLACEHOLDER};
