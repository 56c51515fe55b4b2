//! Session statistics

use crate::core::{MAX_INCORRECT, RoundStatus};

/// Totals across the rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub correct_guesses: usize,
    pub incorrect_guesses: usize,
    /// Won rounds indexed by the number of misses in them
    pub miss_distribution: [usize; MAX_INCORRECT as usize + 1],
    pub best_round: Option<i64>,
}

impl Statistics {
    /// Record a finished round
    pub fn record_round(&mut self, status: RoundStatus, misses: u8, points: i64) {
        self.rounds_played += 1;
        if status == RoundStatus::Won {
            self.rounds_won += 1;
            if let Some(slot) = self.miss_distribution.get_mut(misses as usize) {
                *slot += 1;
            }
        }
        self.best_round = Some(self.best_round.map_or(points, |best| best.max(points)));
    }

    #[must_use]
    pub const fn rounds_lost(&self) -> usize {
        self.rounds_played - self.rounds_won
    }

    /// Percentage of rounds won (0 when nothing was played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.rounds_lost(), 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.best_round, None);
    }

    #[test]
    fn record_rounds() {
        let mut stats = Statistics::default();
        stats.record_round(RoundStatus::Won, 2, 8);
        stats.record_round(RoundStatus::Lost, 7, -12);
        stats.record_round(RoundStatus::Won, 0, 10);

        assert_eq!(stats.rounds_played, 3);
        assert_eq!(stats.rounds_won, 2);
        assert_eq!(stats.rounds_lost(), 1);
        assert_eq!(stats.miss_distribution[0], 1);
        assert_eq!(stats.miss_distribution[2], 1);
        assert_eq!(stats.best_round, Some(10));
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
