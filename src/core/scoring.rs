//! Scoring policy
//!
//! Maps a guess outcome and the round's level to a point delta.

use super::{Level, Outcome};

/// Points awarded and deducted per guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    /// Added for every correct guess, independent of level
    pub reward: i64,
    /// Base deduction for an incorrect guess (negative), scaled by the level multiplier
    pub penalty: i64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            reward: 2,
            penalty: -1,
        }
    }
}

impl ScoringPolicy {
    #[must_use]
    pub const fn new(reward: i64, penalty: i64) -> Self {
        Self { reward, penalty }
    }

    /// Point delta for a guess
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Level, Outcome, ScoringPolicy};
    ///
    /// let policy = ScoringPolicy::default();
    /// assert_eq!(policy.score_delta(Outcome::Correct, Level::Unix), 2);
    /// assert_eq!(policy.score_delta(Outcome::Incorrect, Level::Hard), -3);
    /// ```
    #[must_use]
    pub const fn score_delta(&self, outcome: Outcome, level: Level) -> i64 {
        match outcome {
            Outcome::Correct => self.reward,
            // Saturating so extreme policies clamp instead of overflowing
            Outcome::Incorrect => self
                .penalty
                .saturating_abs()
                .saturating_mul(level.multiplier())
                .saturating_neg(),
        }
    }
}

/// Running score for a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(i64);

impl Score {
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn apply(&mut self, delta: i64) {
        self.0 = self.0.saturating_add(delta);
    }
}
