//! Snapshots and events handed to front ends

use super::Statistics;
use crate::core::{GuessError, GuessReport, Letter, Level, RoundState, RoundStatus};

/// Read-only snapshot of a round for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub level: Level,
    pub masked: String,
    pub hits: Vec<Letter>,
    pub misses: Vec<Letter>,
    pub incorrect_count: u8,
    pub lives_left: u8,
    pub status: RoundStatus,
    /// Points earned in this round so far
    pub round_points: i64,
    /// Cumulative session score
    pub score: i64,
    /// The secret word, only once the round is over
    pub revealed: Option<String>,
}

impl RoundView {
    #[must_use]
    pub fn capture(level: Level, state: &RoundState, round_points: i64, score: i64) -> Self {
        let (hits, misses) = state.sorted_guesses();
        let status = state.status();
        Self {
            level,
            masked: state.masked_word(),
            hits,
            misses,
            incorrect_count: state.incorrect_count(),
            lives_left: state.lives_left(),
            status,
            round_points,
            score,
            revealed: status
                .is_terminal()
                .then(|| state.word().text().to_string()),
        }
    }
}

/// Final result of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub level: Level,
    pub word: String,
    pub status: RoundStatus,
    pub incorrect_count: u8,
    pub round_points: i64,
    pub score: i64,
}

/// An accepted guess with its scoring applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub report: GuessReport,
    pub delta: i64,
    pub view: RoundView,
    /// Set when this guess ended the round
    pub summary: Option<RoundSummary>,
}

/// Everything the game loop tells its reporter
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted(RoundView),
    GuessRejected(GuessError),
    GuessScored(ScoredGuess),
    RoundEnded(RoundSummary),
    GameOver { score: i64, stats: Statistics },
}
