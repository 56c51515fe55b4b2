//! Difficulty levels
//!
//! A level picks the word list a round draws from and scales the penalty
//! for an incorrect guess.

use std::fmt;
use std::str::FromStr;

/// Difficulty tier of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Easy,
    Medium,
    Hard,
    Unix,
}

/// Error returned when a level name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown level '{}' (expected easy, medium, hard or unix)",
            self.0
        )
    }
}

impl std::error::Error for UnknownLevel {}

impl Level {
    /// All levels, easiest first
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Unix];

    /// Incorrect-guess cost multiplier (1-4)
    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Unix => 4,
        }
    }

    /// Identifier of the backing word list (also its file stem)
    #[must_use]
    pub const fn list_name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unix => "unix",
        }
    }

    /// Single-letter shortcut accepted at the level prompt
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Easy => 'E',
            Self::Medium => 'M',
            Self::Hard => 'H',
            Self::Unix => 'U',
        }
    }

    /// Create a level from a name or shortcut, case-insensitively
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Level;
    ///
    /// assert_eq!(Level::from_name("u"), Some(Level::Unix));
    /// assert_eq!(Level::from_name("MeDiUm"), Some(Level::Medium));
    /// assert_eq!(Level::from_name("extreme"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" => Some(Self::Easy),
            "m" | "medium" => Some(Self::Medium),
            "h" | "hard" => Some(Self::Hard),
            "u" | "unix" => Some(Self::Unix),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unix => "Unix",
        };
        f.write_str(label)
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_grow_with_difficulty() {
        let multipliers: Vec<i64> = Level::ALL.iter().map(|l| l.multiplier()).collect();
        assert_eq!(multipliers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn parse_names_and_shortcuts() {
        assert_eq!("easy".parse::<Level>(), Ok(Level::Easy));
        assert_eq!("MEDIUM".parse::<Level>(), Ok(Level::Medium));
        assert_eq!("HaRd".parse::<Level>(), Ok(Level::Hard));
        assert_eq!("U".parse::<Level>(), Ok(Level::Unix));
        assert_eq!(" e ".parse::<Level>(), Ok(Level::Easy));
    }

    #[test]
    fn parse_unknown_level() {
        let err = "nightmare".parse::<Level>().unwrap_err();
        assert_eq!(err, UnknownLevel("nightmare".to_string()));
        assert!(err.to_string().contains("nightmare"));
    }

    #[test]
    fn shortcut_round_trips_through_parser() {
        for level in Level::ALL {
            assert_eq!(Level::from_name(&level.shortcut().to_string()), Some(level));
            assert_eq!(Level::from_name(level.list_name()), Some(level));
        }
    }

    #[test]
    fn display_labels() {
        assert_eq!(Level::Unix.to_string(), "Unix");
        assert_eq!(format!("{}", Level::Easy), "Easy");
    }
}
