//! Word lists for Hangman
//!
//! Embedded per-level lists compiled into the binary, file loading, and the
//! `WordSource` abstraction the game draws words through.

mod embedded;
mod list;
pub mod loader;
mod source;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT, UNIX, UNIX_COUNT};
pub use list::WordList;
pub use source::{DirectorySource, EmbeddedSource, MemorySource, WordListError, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
        assert_eq!(UNIX.len(), UNIX_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for list in [EASY, MEDIUM, HARD, UNIX] {
            for &word in list {
                assert!(!word.is_empty());
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn lists_grow_with_difficulty() {
        assert!(EASY_COUNT < MEDIUM_COUNT);
        assert!(MEDIUM_COUNT < HARD_COUNT);
        assert!(HARD_COUNT < UNIX_COUNT);
    }

    #[test]
    fn embedded_lists_have_no_duplicates() {
        for list in [EASY, MEDIUM, HARD, UNIX] {
            let unique: std::collections::HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }
}
