//! Guess validation.
//!
//! Raw player input becomes either a fault or an accepted letter. The
//! first failing check wins, so at most one problem is reported per guess.

use crate::either::Either;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An accepted single ASCII letter, original case preserved.
///
/// Serializes as a one-character string. Deserializing goes through
/// `Guess::letter`, so rejected input never becomes a `Guess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guess {
    letter: char,
}

impl Guess {
    /// Validates raw input as a single letter guess.
    ///
    /// - Anything other than exactly one character (including the empty
    ///   string) is `MultipleLettersNotAllowed`.
    /// - A single character outside `a`-`z` / `A`-`Z` is `InvalidCharacter`.
    #[instrument]
    pub fn letter(raw: &str) -> Either<GameError, Guess> {
        let mut chars = raw.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                debug!("Rejected guess with wrong length");
                return Either::left(GameError::MultipleLettersNotAllowed);
            }
        };

        if !letter.is_ascii_alphabetic() {
            debug!(%letter, "Rejected non-letter guess");
            return Either::left(GameError::InvalidCharacter);
        }

        Either::right(Guess { letter })
    }

    /// Returns the guessed letter.
    pub fn as_char(&self) -> char {
        self.letter
    }
}

impl TryFrom<String> for Guess {
    type Error = GameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Guess::letter(&raw).into()
    }
}

impl From<Guess> for String {
    fn from(guess: Guess) -> Self {
        guess.letter.to_string()
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lowercase_and_uppercase() {
        assert_eq!(Guess::letter("a").into_right().map(|g| g.as_char()), Some('a'));
        assert_eq!(Guess::letter("Q").into_right().map(|g| g.as_char()), Some('Q'));
    }

    #[test]
    fn test_rejects_multiple_letters() {
        assert_eq!(
            Guess::letter("ca"),
            Either::Left(GameError::MultipleLettersNotAllowed)
        );
    }

    #[test]
    fn test_empty_input_counts_as_wrong_length() {
        assert_eq!(
            Guess::letter(""),
            Either::Left(GameError::MultipleLettersNotAllowed)
        );
    }

    #[test]
    fn test_length_checked_before_character() {
        // "12" is both too long and non-alphabetic; length wins.
        assert_eq!(
            Guess::letter("12"),
            Either::Left(GameError::MultipleLettersNotAllowed)
        );
    }

    #[test]
    fn test_rejects_digits_symbols_and_non_ascii() {
        for raw in ["1", "?", " ", "é", "ß"] {
            assert_eq!(
                Guess::letter(raw),
                Either::Left(GameError::InvalidCharacter),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let guess = Guess::letter("K").into_right().unwrap();
        assert_eq!(serde_json::to_string(&guess).unwrap(), r#""K""#);
        let back: Guess = serde_json::from_str(r#""K""#).unwrap();
        assert_eq!(back, guess);
    }

    #[test]
    fn test_deserialize_rejects_invalid_letters() {
        for raw in [r#""1""#, r#""ab""#, r#""""#, r#"{"letter":"1"}"#] {
            assert!(serde_json::from_str::<Guess>(raw).is_err(), "input {raw}");
        }
    }

    #[test]
    fn test_try_from_reports_fault() {
        assert_eq!(
            Guess::try_from("?".to_string()),
            Err(GameError::InvalidCharacter)
        );
        assert_eq!(
            Guess::try_from("ab".to_string()),
            Err(GameError::MultipleLettersNotAllowed)
        );
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(Guess::letter("a"), Guess::letter("A"));
        assert_eq!(Guess::letter("a"), Guess::letter("a"));
    }
}
