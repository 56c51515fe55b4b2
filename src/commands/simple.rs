//! Simple console mode
//!
//! Line-based game without the TUI: a stdin `Prompter` and a colored
//! stdout `Reporter` plugged into the `GameLoop`.

use super::levels::LevelInfo;
use crate::core::Level;
use crate::game::{
    GameConfig, GameError, GameEvent, GameLoop, Prompter, Reporter, RoundView, Session, Statistics,
};
use crate::output::display::{
    print_game_over, print_guess, print_level_menu, print_rejected, print_round_ended,
    print_round_started, print_title,
};
use crate::wordlists::WordSource;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Reads choices and guesses from a line-based input
pub struct ConsolePrompter<I: BufRead, W: Write> {
    input: I,
    output: W,
    levels: Vec<LevelInfo>,
}

impl<I: BufRead, W: Write> ConsolePrompter<I, W> {
    pub const fn new(input: I, output: W, levels: Vec<LevelInfo>) -> Self {
        Self {
            input,
            output,
            levels,
        }
    }

    /// Print `prompt` and read one trimmed line; `None` on end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<I: BufRead, W: Write> Prompter for ConsolePrompter<I, W> {
    fn choose_level(&mut self) -> io::Result<Option<Level>> {
        writeln!(self.output, "\nChoose a level:")?;
        print_level_menu(&mut self.output, &self.levels)?;

        loop {
            let Some(answer) = self.ask("> ")? else {
                return Ok(None);
            };
            if matches!(answer.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
                return Ok(None);
            }
            if let Some(level) = Level::from_name(&answer) {
                return Ok(Some(level));
            }
            writeln!(self.output, "{}", "Invalid choice. Please try again.".yellow())?;
        }
    }

    fn read_letter(&mut self, _view: &RoundView) -> io::Result<Option<String>> {
        // Single letters are always guesses, so "q" cannot mean quit here
        let answer = self.ask("\nYour guess: ")?;
        Ok(answer.filter(|a| !matches!(a.to_ascii_lowercase().as_str(), "quit" | "exit")))
    }

    fn confirm_continue(&mut self) -> io::Result<bool> {
        loop {
            let Some(answer) = self.ask("\nPlay another round? (y/n): ")? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", "Please answer y or n.".yellow())?,
            }
        }
    }
}

/// Prints game events with colors
pub struct ConsoleReporter<W: Write> {
    output: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::RoundStarted(view) => print_round_started(out, view),
            GameEvent::GuessRejected(error) => print_rejected(out, error),
            GameEvent::GuessScored(scored) => print_guess(out, scored),
            GameEvent::RoundEnded(summary) => print_round_ended(out, summary),
            GameEvent::GameOver { score, stats } => print_game_over(out, *score, stats),
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &GameEvent) {
        if let Err(e) = self.write_event(event) {
            tracing::warn!(error = %e, "failed to write game output");
        }
    }
}

/// Play a console game on arbitrary input and output streams
///
/// # Errors
/// Returns `GameError` if a word list cannot be used, a level runs out of
/// words, or reading input fails.
pub fn play_console<R, I, W, O>(
    session: Session<R>,
    config: GameConfig,
    levels: Vec<LevelInfo>,
    input: I,
    prompt_out: W,
    report_out: O,
) -> Result<Statistics, GameError>
where
    R: Rng,
    I: BufRead,
    W: Write,
    O: Write,
{
    let prompter = ConsolePrompter::new(input, prompt_out, levels);
    let reporter = ConsoleReporter::new(report_out);
    GameLoop::new(session, config, prompter, reporter).run()
}

/// Run the simple console mode on stdin/stdout
///
/// # Errors
/// Returns `GameError` if the word lists cannot be loaded, a level runs
/// out of words, or stdin cannot be read.
pub fn run_simple(
    source: Box<dyn WordSource>,
    config: &GameConfig,
) -> Result<Statistics, GameError> {
    // The menu is only shown when no level was fixed up front
    let levels = match config.level {
        Some(_) => Vec::new(),
        None => super::levels::level_overview(source.as_ref())?,
    };
    let session = Session::from_config(source, config);

    print_title(&mut io::stdout())?;
    play_console(
        session,
        *config,
        levels,
        io::stdin().lock(),
        io::stdout(),
        io::stdout(),
    )
}
