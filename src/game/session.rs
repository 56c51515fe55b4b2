//! Game session
//!
//! Owns everything that outlives a single round: the running score, the
//! statistics, the words already played, the cached word lists and the
//! random source. Every front end drives the game through a `Session`.

use super::events::{RoundSummary, RoundView, ScoredGuess};
use super::{GameConfig, Statistics};
use crate::core::{
    GuessError, Letter, Level, Outcome, RoundState, Score, ScoringPolicy,
};
use crate::wordlists::{WordList, WordListError, WordSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::io;

/// Errors that end the game
#[derive(Debug)]
pub enum GameError {
    WordList(WordListError),
    /// Every word of the level has already been played this session
    Exhausted(Level),
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordList(e) => write!(f, "{e}"),
            Self::Exhausted(level) => {
                write!(f, "Every {level} word has been played this session")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordList(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Exhausted(_) => None,
        }
    }
}

impl From<WordListError> for GameError {
    fn from(e: WordListError) -> Self {
        Self::WordList(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The round currently being played (or the last one, once finished)
#[derive(Debug, Clone)]
pub struct ActiveRound {
    pub level: Level,
    pub state: RoundState,
    pub points: i64,
}

/// State shared across the rounds of one game
pub struct Session<R: Rng> {
    source: Box<dyn WordSource>,
    lists: FxHashMap<Level, WordList>,
    rng: R,
    scoring: ScoringPolicy,
    score: Score,
    used_words: FxHashSet<String>,
    stats: Statistics,
    round: Option<ActiveRound>,
}

impl<R: Rng> Session<R> {
    /// Create a session drawing words from `source`
    pub fn new(source: Box<dyn WordSource>, scoring: ScoringPolicy, rng: R) -> Self {
        Self {
            source,
            lists: FxHashMap::default(),
            rng,
            scoring,
            score: Score::default(),
            used_words: FxHashSet::default(),
            stats: Statistics::default(),
            round: None,
        }
    }

    /// Get the word list for a level, loading it on first use
    ///
    /// # Errors
    /// Returns `WordListError` if the list is unavailable or empty.
    pub fn word_list(&mut self, level: Level) -> Result<&WordList, WordListError> {
        if !self.lists.contains_key(&level) {
            let list = WordList::load(self.source.as_ref(), level)?;
            self.lists.insert(level, list);
        }
        Ok(&self.lists[&level])
    }

    /// Draw a fresh word and start a round at `level`
    ///
    /// Any previous round is discarded.
    ///
    /// # Errors
    /// Returns `GameError::WordList` if the level's list cannot be used and
    /// `GameError::Exhausted` once all of its words have been played.
    pub fn start_round(&mut self, level: Level) -> Result<RoundView, GameError> {
        self.word_list(level)?;
        let list = &self.lists[&level];
        let word = list
            .pick_unused(&mut self.rng, &self.used_words)
            .cloned()
            .ok_or(GameError::Exhausted(level))?;

        self.used_words.insert(word.text().to_string());
        tracing::info!(%level, letters = word.len(), "round started");

        let round = ActiveRound {
            level,
            state: RoundState::new(word),
            points: 0,
        };
        let view = RoundView::capture(level, &round.state, 0, self.score.value());
        self.round = Some(round);
        Ok(view)
    }

    /// Parse raw input and apply it as a guess to the current round
    ///
    /// # Errors
    /// Returns `GuessError` for invalid input, a repeated letter, a finished
    /// round, or when no round has been started. Score and round are left
    /// untouched in every error case.
    pub fn guess(&mut self, input: &str) -> Result<ScoredGuess, GuessError> {
        let letter = Letter::parse(input)?;
        self.guess_letter(letter)
    }

    /// Apply an already-parsed letter to the current round
    ///
    /// # Errors
    /// See [`Session::guess`].
    pub fn guess_letter(&mut self, letter: Letter) -> Result<ScoredGuess, GuessError> {
        let round = self.round.as_mut().ok_or(GuessError::NoRound)?;
        let report = round.state.guess(letter)?;

        let delta = self.scoring.score_delta(report.outcome, round.level);
        round.points += delta;
        self.score.apply(delta);

        match report.outcome {
            Outcome::Correct => self.stats.correct_guesses += 1,
            Outcome::Incorrect => self.stats.incorrect_guesses += 1,
        }
        tracing::debug!(%letter, outcome = ?report.outcome, delta, score = self.score.value(), "guess applied");

        let view = RoundView::capture(round.level, &round.state, round.points, self.score.value());

        let summary = report.status.is_terminal().then(|| RoundSummary {
            level: round.level,
            word: round.state.word().text().to_string(),
            status: report.status,
            incorrect_count: round.state.incorrect_count(),
            round_points: round.points,
            score: self.score.value(),
        });

        if let Some(summary) = &summary {
            self.stats
                .record_round(summary.status, summary.incorrect_count, summary.round_points);
            tracing::info!(
                level = %summary.level,
                status = ?summary.status,
                points = summary.round_points,
                score = summary.score,
                "round ended"
            );
        }

        Ok(ScoredGuess {
            report,
            delta,
            view,
            summary,
        })
    }

    #[must_use]
    pub const fn round(&self) -> Option<&ActiveRound> {
        self.round.as_ref()
    }

    /// Snapshot of the current round
    #[must_use]
    pub fn view(&self) -> Option<RoundView> {
        self.round.as_ref().map(|round| {
            RoundView::capture(round.level, &round.state, round.points, self.score.value())
        })
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score.value()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    /// Number of distinct words played this session
    #[must_use]
    pub fn words_played(&self) -> usize {
        self.used_words.len()
    }

    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

impl Session<StdRng> {
    /// Create a session from settings, seeding from the OS unless a seed
    /// is given
    #[must_use]
    pub fn from_config(source: Box<dyn WordSource>, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(source, config.scoring, rng)
    }
}
