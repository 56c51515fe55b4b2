//! Word sources
//!
//! A `WordSource` yields the raw word collection for a level. The game only
//! ever talks to this trait, so lists can come from the binary, from a
//! directory on disk, or from memory in tests.

use super::loader::{load_from_file, words_from_slice};
use super::{EASY, HARD, MEDIUM, UNIX};
use crate::core::{Level, SecretWord};
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to produce a usable word list for a level
#[derive(Debug)]
pub enum WordListError {
    /// The list exists but holds no valid words
    Empty(Level),
    /// The list could not be read at all
    Unavailable {
        level: Level,
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(level) => write!(f, "The {level} word list has no usable words"),
            Self::Unavailable {
                level,
                path,
                source,
            } => write!(
                f,
                "The {level} word list could not be read from {}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
            Self::Empty(_) => None,
        }
    }
}

impl WordListError {
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::Empty(level) | Self::Unavailable { level, .. } => *level,
        }
    }
}

/// Provider of the raw word collection per level
pub trait WordSource {
    /// Load every valid word for `level`
    ///
    /// # Errors
    /// Returns `WordListError::Unavailable` when the backing data cannot be
    /// read. An empty result is not an error here.
    fn load(&self, level: Level) -> Result<Vec<SecretWord>, WordListError>;

    /// Short human-readable description of where words come from
    fn describe(&self) -> String;
}

/// Word lists compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Raw embedded entries for a level
    #[must_use]
    pub const fn raw(level: Level) -> &'static [&'static str] {
        match level {
            Level::Easy => EASY,
            Level::Medium => MEDIUM,
            Level::Hard => HARD,
            Level::Unix => UNIX,
        }
    }
}

impl WordSource for EmbeddedSource {
    fn load(&self, level: Level) -> Result<Vec<SecretWord>, WordListError> {
        Ok(words_from_slice(Self::raw(level)))
    }

    fn describe(&self) -> String {
        "embedded word lists".to_string()
    }
}

/// Word lists read from `<dir>/<level>.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `level`
    #[must_use]
    pub fn path_for(&self, level: Level) -> PathBuf {
        self.dir.join(format!("{}.txt", level.list_name()))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl WordSource for DirectorySource {
    fn load(&self, level: Level) -> Result<Vec<SecretWord>, WordListError> {
        let path = self.path_for(level);
        load_from_file(&path).map_err(|source| WordListError::Unavailable {
            level,
            path,
            source,
        })
    }

    fn describe(&self) -> String {
        format!("word lists in {}", self.dir.display())
    }
}

/// Word lists held in memory
///
/// Levels without an entry load as empty.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    lists: FxHashMap<Level, Vec<SecretWord>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the words for a level, skipping invalid entries
    #[must_use]
    pub fn with_words(mut self, level: Level, words: &[&str]) -> Self {
        self.lists.insert(level, words_from_slice(words));
        self
    }
}

impl WordSource for MemorySource {
    fn load(&self, level: Level) -> Result<Vec<SecretWord>, WordListError> {
        Ok(self.lists.get(&level).cloned().unwrap_or_default())
    }

    fn describe(&self) -> String {
        "in-memory word lists".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_loads_every_level() {
        for level in Level::ALL {
            let words = EmbeddedSource.load(level).unwrap();
            assert_eq!(words.len(), EmbeddedSource::raw(level).len());
        }
    }

    #[test]
    fn directory_source_paths() {
        let source = DirectorySource::new("/tmp/words");
        assert_eq!(source.path_for(Level::Unix), PathBuf::from("/tmp/words/unix.txt"));
        assert_eq!(source.dir(), Path::new("/tmp/words"));
    }

    #[test]
    fn directory_source_missing_file_is_unavailable() {
        let source = DirectorySource::new("definitely/not/a/dir");
        let err = source.load(Level::Hard).unwrap_err();
        assert!(matches!(err, WordListError::Unavailable { level: Level::Hard, .. }));
        assert_eq!(err.level(), Level::Hard);
        assert!(err.to_string().contains("hard.txt"));
    }

    #[test]
    fn memory_source_unset_level_is_empty() {
        let source = MemorySource::new().with_words(Level::Easy, &["cat", "dog"]);
        assert_eq!(source.load(Level::Easy).unwrap().len(), 2);
        assert!(source.load(Level::Medium).unwrap().is_empty());
    }

    #[test]
    fn describe_names_the_origin() {
        assert!(DirectorySource::new("lists").describe().contains("lists"));
        assert_eq!(EmbeddedSource.describe(), "embedded word lists");
    }
}
