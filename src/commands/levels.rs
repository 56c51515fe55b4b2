//! Levels command
//!
//! Summarizes the word list behind each difficulty level.

use crate::core::Level;
use crate::wordlists::{WordList, WordListError, WordSource};

/// Overview of one level's word list
#[derive(Debug, Clone, PartialEq)]
pub struct LevelInfo {
    pub level: Level,
    pub word_count: usize,
    pub average_length: f64,
}

impl LevelInfo {
    #[must_use]
    pub fn from_list(list: &WordList) -> Self {
        let total: usize = list.words().iter().map(crate::core::SecretWord::len).sum();
        let average_length = if list.is_empty() {
            0.0
        } else {
            total as f64 / list.len() as f64
        };
        Self {
            level: list.level(),
            word_count: list.len(),
            average_length,
        }
    }
}

/// Load every level from `source` and summarize it
///
/// # Errors
/// Returns `WordListError` for the first level whose list is unavailable
/// or empty.
pub fn level_overview(source: &dyn WordSource) -> Result<Vec<LevelInfo>, WordListError> {
    Level::ALL
        .iter()
        .map(|&level| WordList::load(source, level).map(|list| LevelInfo::from_list(&list)))
        .collect()
}
