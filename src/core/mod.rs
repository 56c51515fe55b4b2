//! Core domain types for Hangman
//!
//! The round state machine and the pure scoring policy. Nothing here does
//! I/O or draws random numbers.

mod letter;
mod level;
mod round;
mod scoring;
mod word;

pub use letter::{Letter, LetterError};
pub use level::{Level, UnknownLevel};
pub use round::{GuessError, GuessReport, MAX_INCORRECT, Outcome, RoundState, RoundStatus};
pub use scoring::{Score, ScoringPolicy};
pub use word::{SecretWord, WordError};
