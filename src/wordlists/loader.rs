//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Returns a vector of valid `SecretWord` instances,
/// skipping blank lines and entries that are not purely ASCII letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/easy.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into words, skipping invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                SecretWord::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}
