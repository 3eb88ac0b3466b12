//! Disease-name guessing.

use serde::{Deserialize, Serialize};

use crate::constants::diagnosis::{CORRECT_GUESS_BONUS, INCORRECT_GUESS_PENALTY};
use crate::health::clamp_health;

/// What happens after an incorrect guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncorrectGuessPolicy {
    /// The patient stays in the waiting room and can still be treated.
    #[default]
    KeepWaiting,
    /// The working day ends immediately.
    EndDay,
}

/// Case-insensitive comparison of a free-text guess to the true name.
/// Surrounding whitespace is ignored.
pub fn guess_matches(guess: &str, disease_name: &str) -> bool {
    guess.trim().to_lowercase() == disease_name.trim().to_lowercase()
}

/// Health after a guess: `+10` if correct, `-30` otherwise, clamped.
pub fn health_after_guess(health: i32, correct: bool) -> i32 {
    if correct {
        clamp_health(health + CORRECT_GUESS_BONUS)
    } else {
        clamp_health(health - INCORRECT_GUESS_PENALTY)
    }
}
