//! Game configuration

use crate::core::{Level, ScoringPolicy};

/// Settings for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Play every round at this level instead of asking each round
    pub level: Option<Level>,
    pub scoring: ScoringPolicy,
    /// Stop after the first lost round instead of offering another
    pub end_on_loss: bool,
    /// Seed for word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn ending_on_loss(mut self) -> Self {
        self.end_on_loss = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.level, None);
        assert_eq!(config.scoring, ScoringPolicy::default());
        assert!(!config.end_on_loss);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_sets_fields() {
        let config = GameConfig::default()
            .with_level(Level::Hard)
            .with_scoring(ScoringPolicy::new(3, -2))
            .with_seed(9)
            .ending_on_loss();
        assert_eq!(config.level, Some(Level::Hard));
        assert_eq!(config.scoring.reward, 3);
        assert_eq!(config.seed, Some(9));
        assert!(config.end_on_loss);
    }
}
