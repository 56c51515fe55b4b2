//! Secret word representation
//!
//! A `SecretWord` stores the word to guess along with letter position
//! indices so a correct guess can reveal every occurrence at once.

use super::Letter;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// The word being guessed in a round
///
/// Stored uppercase. Immutable for the lifetime of the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("rhythm").unwrap();
    /// assert_eq!(word.text(), "RHYTHM");
    ///
    /// assert!(SecretWord::new("two words").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.char_positions.contains_key(&letter.byte())
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.char_positions
            .get(&letter.byte())
            .map_or(&[], Vec::as_slice)
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.char_positions.len()
    }

    /// Check whether every letter of the word is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &FxHashSet<Letter>) -> bool {
        self.char_positions
            .keys()
            .all(|&b| Letter::from_byte(b).is_some_and(|l| guessed.contains(&l)))
    }

    /// Render the word with unguessed letters masked, space separated
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, SecretWord};
    /// use rustc_hash::FxHashSet;
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// let mut guessed = FxHashSet::default();
    /// guessed.insert(Letter::parse("a").unwrap());
    /// assert_eq!(word.masked(&guessed), "_ A _");
    /// ```
    #[must_use]
    pub fn masked(&self, guessed: &FxHashSet<Letter>) -> String {
        let mut out = String::with_capacity(self.text.len() * 2);
        for (i, b) in self.text.bytes().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match Letter::from_byte(b) {
                Some(letter) if guessed.contains(&letter) => out.push(letter.as_char()),
                _ => out.push('_'),
            }
        }
        out
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::parse(&c.to_string()).unwrap()
    }

    #[test]
    fn word_creation_uppercases() {
        let word = SecretWord::new("kayak").unwrap();
        assert_eq!(word.text(), "KAYAK");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());

        let word2 = SecretWord::new("KaYaK").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
        assert_eq!(SecretWord::new("ice cream"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("x11"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("kayak").unwrap();
        assert_eq!(word.positions_of(letter('k')), &[0, 4]);
        assert_eq!(word.positions_of(letter('a')), &[1, 3]);
        assert_eq!(word.positions_of(letter('y')), &[2]);
        assert_eq!(word.positions_of(letter('z')), &[] as &[usize]);
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("dog").unwrap();
        assert!(word.has_letter(letter('d')));
        assert!(word.has_letter(letter('O')));
        assert!(!word.has_letter(letter('x')));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(SecretWord::new("kayak").unwrap().distinct_letters(), 3);
        assert_eq!(SecretWord::new("cat").unwrap().distinct_letters(), 3);
        assert_eq!(SecretWord::new("aaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_masked_reveals_all_occurrences() {
        let word = SecretWord::new("banana").unwrap();
        let mut guessed = FxHashSet::default();
        assert_eq!(word.masked(&guessed), "_ _ _ _ _ _");

        guessed.insert(letter('a'));
        assert_eq!(word.masked(&guessed), "_ A _ A _ A");

        guessed.insert(letter('n'));
        guessed.insert(letter('q'));
        assert_eq!(word.masked(&guessed), "_ A N A N A");
    }

    #[test]
    fn word_revealed_only_when_every_letter_guessed() {
        let word = SecretWord::new("banana").unwrap();
        let mut guessed = FxHashSet::default();
        guessed.insert(letter('a'));
        guessed.insert(letter('n'));
        assert!(!word.is_revealed_by(&guessed));

        guessed.insert(letter('b'));
        assert!(word.is_revealed_by(&guessed));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
