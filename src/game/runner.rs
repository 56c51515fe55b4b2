//! Round-based game loop
//!
//! Drives a `Session` through rounds, asking a `Prompter` for input and
//! telling a `Reporter` what happened. Neither collaborator is tied to a
//! terminal, so the whole loop runs under test with scripted input.

use super::events::{GameEvent, RoundSummary};
use super::session::{GameError, Session};
use super::{GameConfig, RoundView, Statistics};
use crate::core::{Level, RoundStatus};
use rand::Rng;
use std::io;

/// Source of player decisions
///
/// Returning `Ok(None)` means input has ended (EOF or the player asked to
/// quit); the loop stops gracefully.
pub trait Prompter {
    /// Ask which level the next round is played at
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn choose_level(&mut self) -> io::Result<Option<Level>>;

    /// Ask for the next guess; the raw text is validated by the loop
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn read_letter(&mut self, view: &RoundView) -> io::Result<Option<String>>;

    /// Ask whether to play another round
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn confirm_continue(&mut self) -> io::Result<bool>;
}

/// Sink for game progress
pub trait Reporter {
    fn report(&mut self, event: &GameEvent);
}

/// Orchestrates rounds until the player stops
pub struct GameLoop<R: Rng, P: Prompter, O: Reporter> {
    session: Session<R>,
    config: GameConfig,
    prompter: P,
    reporter: O,
}

impl<R: Rng, P: Prompter, O: Reporter> GameLoop<R, P, O> {
    pub const fn new(session: Session<R>, config: GameConfig, prompter: P, reporter: O) -> Self {
        Self {
            session,
            config,
            prompter,
            reporter,
        }
    }

    /// Play rounds until the player declines another one or input ends
    ///
    /// Reports `GameOver` with the final statistics before returning them.
    ///
    /// # Errors
    /// Returns `GameError` if a word list cannot be used, a level runs out
    /// of words, or the prompter fails to read input.
    pub fn run(&mut self) -> Result<Statistics, GameError> {
        while let Some(level) = self.next_level()? {
            let Some(summary) = self.play_round(level)? else {
                break;
            };

            if summary.status == RoundStatus::Lost && self.config.end_on_loss {
                break;
            }

            if !self.prompter.confirm_continue()? {
                break;
            }
        }

        let stats = self.session.stats().clone();
        self.reporter.report(&GameEvent::GameOver {
            score: self.session.score(),
            stats: stats.clone(),
        });
        Ok(stats)
    }

    /// Play a single round to completion
    ///
    /// Returns `None` if input ended before the round finished.
    ///
    /// # Errors
    /// See [`GameLoop::run`].
    pub fn play_round(&mut self, level: Level) -> Result<Option<RoundSummary>, GameError> {
        let mut view = self.session.start_round(level)?;
        self.reporter.report(&GameEvent::RoundStarted(view.clone()));

        loop {
            let Some(input) = self.prompter.read_letter(&view)? else {
                return Ok(None);
            };

            match self.session.guess(&input) {
                Ok(scored) => {
                    view = scored.view.clone();
                    let summary = scored.summary.clone();
                    self.reporter.report(&GameEvent::GuessScored(scored));

                    if let Some(summary) = summary {
                        self.reporter.report(&GameEvent::RoundEnded(summary.clone()));
                        return Ok(Some(summary));
                    }
                }
                Err(e) => {
                    tracing::debug!(input = %input, error = %e, "guess rejected");
                    self.reporter.report(&GameEvent::GuessRejected(e));
                }
            }
        }
    }

    fn next_level(&mut self) -> io::Result<Option<Level>> {
        match self.config.level {
            Some(level) => Ok(Some(level)),
            None => self.prompter.choose_level(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session<R> {
        &self.session
    }

    #[must_use]
    pub fn into_parts(self) -> (Session<R>, P, O) {
        (self.session, self.prompter, self.reporter)
    }
}
