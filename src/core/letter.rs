//! A single guessed letter

use std::fmt;

/// An uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for input that is not a single ASCII letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotAsciiLetter(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a letter"),
            Self::TooLong(len) => {
                write!(f, "Please enter a single letter, got {len} characters")
            }
            Self::NotAsciiLetter(c) => write!(f, "'{c}' is not a letter A-Z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a byte, normalizing to uppercase
    ///
    /// Returns `None` unless `byte` is an ASCII letter.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parse user input into a letter
    ///
    /// Surrounding whitespace is ignored; anything other than exactly one
    /// ASCII letter is rejected.
    ///
    /// # Errors
    /// Returns `LetterError` if the input is empty, longer than one
    /// character, or not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" q ").unwrap().as_char(), 'Q');
    /// assert!(Letter::parse("7").is_err());
    /// assert!(Letter::parse("ab").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.trim().chars();
        let first = chars.next().ok_or(LetterError::Empty)?;

        let rest = chars.count();
        if rest > 0 {
            return Err(LetterError::TooLong(rest + 1));
        }

        u8::try_from(first)
            .ok()
            .and_then(Self::from_byte)
            .ok_or(LetterError::NotAsciiLetter(first))
    }

    /// Get the uppercase byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(Letter::parse("a").unwrap(), Letter::parse("A").unwrap());
        assert_eq!(Letter::parse("z").unwrap().byte(), b'Z');
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Letter::parse(""), Err(LetterError::Empty));
        assert_eq!(Letter::parse("   "), Err(LetterError::Empty));
    }

    #[test]
    fn parse_rejects_multiple_characters() {
        assert_eq!(Letter::parse("ab"), Err(LetterError::TooLong(2)));
        assert_eq!(Letter::parse("yes"), Err(LetterError::TooLong(3)));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(Letter::parse("3"), Err(LetterError::NotAsciiLetter('3')));
        assert_eq!(Letter::parse("?"), Err(LetterError::NotAsciiLetter('?')));
        assert_eq!(Letter::parse("é"), Err(LetterError::NotAsciiLetter('é')));
    }

    #[test]
    fn from_byte_filters_non_letters() {
        assert_eq!(Letter::from_byte(b'k').map(Letter::as_char), Some('K'));
        assert_eq!(Letter::from_byte(b'-'), None);
    }

    #[test]
    fn display() {
        assert_eq!(Letter::parse("x").unwrap().to_string(), "X");
    }
}
