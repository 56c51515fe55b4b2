//! Round state machine
//!
//! A round starts `InProgress` with a secret word and moves to `Won` once
//! every letter is guessed, or to `Lost` once the miss limit is exceeded.
//! Both terminal states are final.

use super::{Letter, LetterError, SecretWord};
use rustc_hash::FxHashSet;
use std::fmt;

/// Incorrect guesses tolerated in a round; one more loses it
pub const MAX_INCORRECT: u8 = 6;

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Rejected guesses; none of them mutate the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLetter(LetterError),
    Duplicate(Letter),
    RoundOver(RoundStatus),
    /// No round has been started yet
    NoRound,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(e) => write!(f, "Invalid guess: {e}"),
            Self::Duplicate(letter) => {
                write!(f, "You have already guessed '{letter}'. Please try again.")
            }
            Self::RoundOver(status) => write!(f, "The round is over ({status:?})"),
            Self::NoRound => write!(f, "No round in progress"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLetter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LetterError> for GuessError {
    fn from(e: LetterError) -> Self {
        Self::InvalidLetter(e)
    }
}

/// What a successful guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub letter: Letter,
    pub outcome: Outcome,
    /// How many times the letter occurs in the word (0 when incorrect)
    pub occurrences: usize,
    /// Status after the guess was applied
    pub status: RoundStatus,
}

/// State of one round of Hangman
#[derive(Debug, Clone)]
pub struct RoundState {
    word: SecretWord,
    guessed: FxHashSet<Letter>,
    incorrect_count: u8,
    status: RoundStatus,
}

impl RoundState {
    #[must_use]
    pub fn new(word: SecretWord) -> Self {
        Self {
            word,
            guessed: FxHashSet::default(),
            incorrect_count: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Apply a guess to the round
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` once the round has been won or lost,
    /// and `GuessError::Duplicate` if the letter was already guessed this
    /// round. The round is left untouched in both cases.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, Outcome, RoundState, RoundStatus, SecretWord};
    ///
    /// let mut round = RoundState::new(SecretWord::new("hi").unwrap());
    /// let report = round.guess(Letter::parse("h").unwrap()).unwrap();
    /// assert_eq!(report.outcome, Outcome::Correct);
    /// round.guess(Letter::parse("i").unwrap()).unwrap();
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// ```
    pub fn guess(&mut self, letter: Letter) -> Result<GuessReport, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::RoundOver(self.status));
        }

        if !self.guessed.insert(letter) {
            return Err(GuessError::Duplicate(letter));
        }

        let occurrences = self.word.positions_of(letter).len();
        let outcome = if occurrences > 0 {
            Outcome::Correct
        } else {
            self.incorrect_count += 1;
            Outcome::Incorrect
        };

        self.status = if self.word.is_revealed_by(&self.guessed) {
            RoundStatus::Won
        } else if self.incorrect_count > MAX_INCORRECT {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        Ok(GuessReport {
            letter,
            outcome,
            occurrences,
            status: self.status,
        })
    }

    /// Parse raw input and apply it as a guess
    ///
    /// # Errors
    /// Returns `GuessError::InvalidLetter` for anything but a single ASCII
    /// letter, plus the errors of [`RoundState::guess`].
    pub fn guess_str(&mut self, input: &str) -> Result<GuessReport, GuessError> {
        let letter = Letter::parse(input)?;
        self.guess(letter)
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_count(&self) -> u8 {
        self.incorrect_count
    }

    /// Incorrect guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn lives_left(&self) -> u8 {
        (MAX_INCORRECT + 1).saturating_sub(self.incorrect_count)
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<Letter> {
        &self.guessed
    }

    /// Guessed letters in alphabetical order, split into (hits, misses)
    #[must_use]
    pub fn sorted_guesses(&self) -> (Vec<Letter>, Vec<Letter>) {
        let mut all: Vec<Letter> = self.guessed.iter().copied().collect();
        all.sort_unstable();
        all.into_iter().partition(|&l| self.word.has_letter(l))
    }

    /// The word with unguessed letters masked
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word.masked(&self.guessed)
    }

    /// Per position, the letter if it has been revealed
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<Letter>> {
        self.word
            .text()
            .bytes()
            .map(|b| Letter::from_byte(b).filter(|l| self.guessed.contains(l)))
            .collect()
    }
}
