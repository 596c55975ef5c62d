//! Immutable game snapshots.
//!
//! A `Game` is never mutated once built. `try_to` returns the next snapshot
//! and leaves the receiver untouched, so a driver can keep an older snapshot
//! for display while advancing a newer one.

use crate::config::GameConfig;
use crate::either::Either;
use crate::error::GameError;
use crate::guess::Guess;
use crate::phases::{GameResult, Phase};
use crate::rules::{self, LetterMatching, SecretWordPolicy, PLACEHOLDER};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// How the game was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setup {
    /// Secret word and trials passed validation.
    WellFormed,
    /// Construction failed; the game is over from the start.
    Misconfigured(GameError),
}

/// Hangman game snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) secret_word: String,
    pub(crate) trials: i32,
    pub(crate) policy: SecretWordPolicy,
    pub(crate) matching: LetterMatching,
    pub(crate) setup: Setup,
    /// Fault of the most recent guess, cleared by the next accepted one.
    pub(crate) last_guess_error: Option<GameError>,
    /// Normalized letters that matched the secret; each one cost a trial.
    pub(crate) hits: BTreeSet<char>,
    /// Normalized letters that did not match; each one cost a trial.
    pub(crate) misses: BTreeSet<char>,
    /// Accepted guesses in the order they were applied.
    pub(crate) history: Vec<Guess>,
}

/// Starts a game with the default rules.
pub fn start_game(secret_word: impl Into<String>, trials: i32) -> Game {
    Game::start(secret_word, trials)
}

impl Game {
    /// Starts a game with the default rules (three-letter words, exact matching).
    #[instrument(skip(secret_word))]
    pub fn start(secret_word: impl Into<String>, trials: i32) -> Self {
        Self::from_config(&GameConfig::new(secret_word, trials))
    }

    /// Starts a game from an explicit configuration.
    ///
    /// The secret word is checked before the trial budget; only the first
    /// fault found is recorded.
    #[instrument(skip(config), fields(trials = *config.trials(), policy = ?config.policy()))]
    pub fn from_config(config: &GameConfig) -> Self {
        let secret_word = config.secret_word().clone();
        let trials = *config.trials();
        let policy = *config.policy();

        let fault = policy
            .check(&secret_word)
            .or_else(|| (trials <= 0).then_some(GameError::TrialsMustBePositive));

        let setup = match fault {
            Some(fault) => {
                warn!(%fault, "Game is misconfigured");
                Setup::Misconfigured(fault)
            }
            None => Setup::WellFormed,
        };

        Self {
            secret_word,
            trials,
            policy,
            matching: *config.matching(),
            setup,
            last_guess_error: None,
            hits: BTreeSet::new(),
            misses: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    /// Replays raw inputs against a fresh game.
    #[instrument(skip(config, inputs))]
    pub fn replay<I, S>(config: &GameConfig, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .fold(Self::from_config(config), |game, raw| {
                game.try_to(Guess::letter(raw.as_ref()))
            })
    }

    /// Applies a validated or rejected guess, returning the next snapshot.
    ///
    /// - Over: the returned snapshot equals `self`.
    /// - `Left`: only the reported problem changes.
    /// - `Right`: the letter joins the hits or the misses. Every distinct
    ///   letter costs one trial; repeating a letter costs nothing.
    ///
    /// Uncovering the last letter wins even if it spent the last trial.
    #[instrument(skip(self, guess), fields(guess = ?guess, phase = ?self.phase()))]
    pub fn try_to(&self, guess: Either<GameError, Guess>) -> Game {
        if self.is_over() {
            debug!("Game is over, guess ignored");
            return self.clone();
        }

        let mut next = self.clone();
        match guess {
            Either::Left(err) => {
                warn!(%err, "Guess rejected");
                next.last_guess_error = err.is_problem().then_some(err);
            }
            Either::Right(guess) => {
                let key = self.matching.normalize(guess.as_char());
                next.last_guess_error = None;
                next.history.push(guess);
                let hit = self.secret_contains(key);
                let fresh = if hit {
                    next.hits.insert(key)
                } else {
                    next.misses.insert(key)
                };
                if fresh {
                    let remaining = next.available_trials();
                    debug!(letter = %guess, hit, remaining, "Trial spent");
                } else {
                    debug!(letter = %guess, hit, "Repeated letter, no trial consumed");
                }
            }
        }

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(&next);

        let phase = next.phase();
        if phase != self.phase() {
            info!(?phase, revealed = %next.revealed_secret(), "Game finished");
        }

        next
    }

    fn secret_contains(&self, key: char) -> bool {
        self.secret_word
            .chars()
            .any(|c| self.matching.normalize(c) == key)
    }

    /// Returns true once all trials are consumed or the secret is uncovered.
    ///
    /// A misconfigured game is always over.
    pub fn is_over(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Current state machine phase.
    pub fn phase(&self) -> Phase {
        if let Setup::Misconfigured(_) = self.setup {
            return Phase::Misconfigured;
        }
        if rules::all_letters_guessed(&self.secret_word, &self.hits, self.matching) {
            Phase::Won
        } else if self.available_trials() == 0 {
            Phase::Lost
        } else {
            Phase::Ongoing
        }
    }

    /// Player-facing outcome.
    pub fn result(&self) -> GameResult {
        self.phase().result()
    }

    /// Trials left before the game is lost. Zero when misconfigured.
    pub fn available_trials(&self) -> u32 {
        match self.setup {
            Setup::Misconfigured(_) => 0,
            Setup::WellFormed => {
                let used = i64::try_from(self.consumed_trials()).unwrap_or(i64::MAX);
                let left = i64::from(self.trials).saturating_sub(used);
                u32::try_from(left.max(0)).unwrap_or(0)
            }
        }
    }

    /// Trials spent so far: one per distinct accepted letter.
    pub fn consumed_trials(&self) -> usize {
        self.hits.len() + self.misses.len()
    }

    /// Secret word with unguessed letters masked by `_`.
    ///
    /// A misconfigured game reveals nothing.
    pub fn revealed_secret(&self) -> String {
        match self.setup {
            Setup::Misconfigured(_) => self.secret_word.chars().map(|_| PLACEHOLDER).collect(),
            Setup::WellFormed => rules::reveal(&self.secret_word, &self.hits, self.matching),
        }
    }

    /// Returns true iff the game was constructed in a faulted state.
    pub fn is_misconfigured(&self) -> bool {
        matches!(self.setup, Setup::Misconfigured(_))
    }

    /// Most relevant fault: configuration first, then the last guess.
    ///
    /// Returns `GameError::None` when there is nothing to report.
    pub fn problem(&self) -> GameError {
        match self.setup {
            Setup::Misconfigured(fault) => fault,
            Setup::WellFormed => self.last_guess_error.unwrap_or(GameError::None),
        }
    }

    /// Returns true if `problem()` reports anything.
    pub fn has_problem(&self) -> bool {
        self.problem().is_problem()
    }

    /// How the game was constructed.
    pub fn setup(&self) -> Setup {
        self.setup
    }

    /// The secret word.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// The trial budget as configured.
    pub fn trials(&self) -> i32 {
        self.trials
    }

    /// Secret word policy in force.
    pub fn policy(&self) -> SecretWordPolicy {
        self.policy
    }

    /// Letter matching rule in force.
    pub fn matching(&self) -> LetterMatching {
        self.matching
    }

    /// Distinct successful letters, normalized.
    pub fn hits(&self) -> &BTreeSet<char> {
        &self.hits
    }

    /// Distinct failed letters, normalized.
    pub fn misses(&self) -> &BTreeSet<char> {
        &self.misses
    }

    /// Accepted guesses in order, repeats included.
    pub fn history(&self) -> &[Guess] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(raw: &str) -> Either<GameError, Guess> {
        Guess::letter(raw)
    }

    #[test]
    fn test_fresh_game() {
        let game = Game::start("cat", 5);
        assert_eq!(game.phase(), Phase::Ongoing);
        assert_eq!(game.available_trials(), 5);
        assert_eq!(game.revealed_secret(), "___");
        assert_eq!(game.problem(), GameError::None);
        assert!(!game.is_misconfigured());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_word_fault_reported_before_trial_fault() {
        let game = Game::start("f", -1);
        assert_eq!(game.problem(), GameError::SecretWordMustHaveThreeLetters);
        assert_eq!(
            game.setup(),
            Setup::Misconfigured(GameError::SecretWordMustHaveThreeLetters)
        );
    }

    #[test]
    fn test_misconfigured_game_ignores_guesses() {
        let game = Game::start("cat", 0);
        let after = game.try_to(guess("c"));
        assert_eq!(after, game);
        assert_eq!(after.revealed_secret(), "___");
        assert_eq!(after.problem(), GameError::TrialsMustBePositive);
    }

    #[test]
    fn test_rejected_guess_changes_only_problem() {
        let game = Game::start("cat", 5).try_to(guess("a"));
        let after = game.try_to(guess("?"));
        assert_eq!(after.problem(), GameError::InvalidCharacter);
        assert_eq!(after.hits(), game.hits());
        assert_eq!(after.misses(), game.misses());
        assert_eq!(after.history(), game.history());
    }

    #[test]
    fn test_valid_guess_clears_problem() {
        let game = Game::start("cat", 5).try_to(guess("12")).try_to(guess("z"));
        assert_eq!(game.problem(), GameError::None);
        assert!(!game.has_problem());
    }

    #[test]
    fn test_repeated_miss_costs_one_trial() {
        let game = Game::start("cat", 5).try_to(guess("z")).try_to(guess("z"));
        assert_eq!(game.available_trials(), 4);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_left_none_records_no_problem() {
        let game = Game::start("cat", 5).try_to(Either::left(GameError::None));
        assert_eq!(game.problem(), GameError::None);
    }

    #[test]
    fn test_repeated_hit_costs_one_trial() {
        let game = Game::start("cat", 5).try_to(guess("a"));
        assert_eq!(game.available_trials(), 4);
        let again = game.try_to(guess("a")).try_to(guess("a"));
        assert_eq!(again.available_trials(), 4);
        assert_eq!(again.consumed_trials(), 1);
    }

    #[test]
    fn test_last_letter_on_last_trial_wins() {
        let game = Game::replay(&GameConfig::new("cat", 3), ["c", "a", "t"]);
        assert_eq!(game.available_trials(), 0);
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn test_ignore_case_matching() {
        let config = GameConfig::new("Cat", 3).with_matching(LetterMatching::IgnoreCase);
        let game = Game::from_config(&config).try_to(guess("c")).try_to(guess("A"));
        assert_eq!(game.revealed_secret(), "Ca_");
        assert_eq!(game.available_trials(), 1);
    }

    #[test]
    fn test_exact_matching_treats_case_as_miss() {
        let game = Game::start("cat", 3).try_to(guess("A"));
        assert_eq!(game.revealed_secret(), "___");
        assert_eq!(game.available_trials(), 2);
    }
}
