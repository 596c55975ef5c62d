//! Reveal mask and completion checks.

use super::policy::LetterMatching;
use std::collections::BTreeSet;
use tracing::instrument;

/// Character shown in place of an unguessed letter.
pub const PLACEHOLDER: char = '_';

/// Distinct letters of the secret word, normalized by `matching`.
#[instrument(skip(secret_word))]
pub fn distinct_letters(secret_word: &str, matching: LetterMatching) -> BTreeSet<char> {
    secret_word.chars().map(|c| matching.normalize(c)).collect()
}

/// Returns true if every distinct letter of the secret is in `hits`.
///
/// `hits` holds normalized letters.
#[instrument(skip(secret_word, hits))]
pub fn all_letters_guessed(
    secret_word: &str,
    hits: &BTreeSet<char>,
    matching: LetterMatching,
) -> bool {
    secret_word
        .chars()
        .all(|c| hits.contains(&matching.normalize(c)))
}

/// Masks every letter of the secret not present in `hits`.
///
/// The result always has the same number of characters as the secret.
#[instrument(skip(secret_word, hits))]
pub fn reveal(secret_word: &str, hits: &BTreeSet<char>, matching: LetterMatching) -> String {
    secret_word
        .chars()
        .map(|c| {
            if hits.contains(&matching.normalize(c)) {
                c
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}
