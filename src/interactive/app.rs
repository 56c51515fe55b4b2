//! TUI application state and logic

use crate::core::{Level, Outcome, RoundStatus};
use crate::game::{GameConfig, GameError, RoundView, ScoredGuess, Session, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log
const MAX_MESSAGES: usize = 50;

/// Application state
pub struct App {
    session: Session<StdRng>,
    fixed_level: Option<Level>,
    end_on_loss: bool,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Error that ended the app; reported once the terminal is restored
    fatal: Option<GameError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Waiting for a level key
    ChooseLevel,
    Guessing,
    /// Round finished, waiting for new round or quit
    RoundOver,
    /// No more rounds can be played
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app; with a fixed level the first round starts at once
    #[must_use]
    pub fn new(session: Session<StdRng>, config: &GameConfig) -> Self {
        let mut app = Self {
            session,
            fixed_level: config.level,
            end_on_loss: config.end_on_loss,
            input_mode: InputMode::ChooseLevel,
            messages: vec![Message {
                text: "Welcome! Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            fatal: None,
        };

        match app.fixed_level {
            Some(level) => app.start_round(level),
            None => app.add_message(
                "Choose a level: [E]asy [M]edium [H]ard [U]nix",
                MessageStyle::Info,
            ),
        }
        app
    }

    #[must_use]
    pub const fn session(&self) -> &Session<StdRng> {
        &self.session
    }

    /// The error that ended the app, if any
    #[must_use]
    pub const fn fatal(&self) -> Option<&GameError> {
        self.fatal.as_ref()
    }

    /// Hand over the error that ended the app
    pub fn take_fatal(&mut self) -> Option<GameError> {
        self.fatal.take()
    }

    #[must_use]
    pub fn view(&self) -> Option<RoundView> {
        self.session.view()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        self.session.stats()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn start_round(&mut self, level: Level) {
        match self.session.start_round(level) {
            Ok(view) => {
                self.input_mode = InputMode::Guessing;
                let letters = view.masked.split(' ').count();
                self.add_message(
                    &format!("New round: {level} level, {letters} letters. Type a letter."),
                    MessageStyle::Info,
                );
            }
            Err(e @ GameError::Exhausted(_)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_mode = if self.fixed_level.is_some() {
                    InputMode::GameOver
                } else {
                    InputMode::ChooseLevel
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to start round");
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
                self.fatal = Some(e);
                self.should_quit = true;
            }
        }
    }

    /// Start another round, or go back to the level picker
    pub fn new_round(&mut self) {
        match self.fixed_level {
            Some(level) => self.start_round(level),
            None => {
                self.input_mode = InputMode::ChooseLevel;
                self.add_message(
                    "Choose a level: [E]asy [M]edium [H]ard [U]nix",
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn guess(&mut self, c: char) {
        match self.session.guess(&c.to_string()) {
            Ok(scored) => self.record_guess(&scored),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn record_guess(&mut self, scored: &ScoredGuess) {
        let letter = scored.report.letter;
        match scored.report.outcome {
            Outcome::Correct => {
                let text = if scored.report.occurrences == 1 {
                    format!("There is 1 \"{letter}\"! ({:+})", scored.delta)
                } else {
                    format!(
                        "There are {} \"{letter}\"s! ({:+})",
                        scored.report.occurrences, scored.delta
                    )
                };
                self.add_message(&text, MessageStyle::Success);
            }
            Outcome::Incorrect => self.add_message(
                &format!("No \"{letter}\" in the word. ({:+})", scored.delta),
                MessageStyle::Error,
            ),
        }

        let Some(summary) = &scored.summary else {
            return;
        };

        match summary.status {
            RoundStatus::Won => self.add_message(
                &format!(
                    "🎉 You win! The word was {}. Round {:+}, total {}.",
                    summary.word, summary.round_points, summary.score
                ),
                MessageStyle::Success,
            ),
            RoundStatus::Lost => self.add_message(
                &format!(
                    "💀 You lost! The word was {}. Round {:+}, total {}.",
                    summary.word, summary.round_points, summary.score
                ),
                MessageStyle::Error,
            ),
            RoundStatus::InProgress => return,
        }

        if summary.status == RoundStatus::Lost && self.end_on_loss {
            self.input_mode = InputMode::GameOver;
            self.add_message("Game over. Press 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::RoundOver;
            self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ChooseLevel => {
                if let KeyCode::Char(c) = key.code {
                    if c.eq_ignore_ascii_case(&'q') {
                        self.should_quit = true;
                    } else if let Some(level) = Level::from_name(&c.to_string()) {
                        self.start_round(level);
                    } else {
                        self.add_message(
                            "Invalid choice. Please try again.",
                            MessageStyle::Error,
                        );
                    }
                }
            }
            InputMode::Guessing => {
                // 'q' is a letter here; Esc quits
                if let KeyCode::Char(c) = key.code {
                    self.guess(c);
                }
            }
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n' | 'N' | 'y' | 'Y') | KeyCode::Enter => self.new_round(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            InputMode::GameOver => {
                if matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        if app.should_quit {
            return Ok(app);
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringPolicy;
    use crate::wordlists::MemorySource;
    use rand::SeedableRng;

    fn session(level: Level, words: &[&str]) -> Session<StdRng> {
        Session::new(
            Box::new(MemorySource::new().with_words(level, words)),
            ScoringPolicy::default(),
            StdRng::seed_from_u64(2),
        )
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(key(c));
        }
    }

    #[test]
    fn starts_in_level_picker() {
        let app = App::new(session(Level::Easy, &["cat"]), &GameConfig::default());
        assert_eq!(app.input_mode, InputMode::ChooseLevel);
        assert!(app.view().is_none());
    }

    #[test]
    fn fixed_level_starts_round() {
        let config = GameConfig::default().with_level(Level::Easy);
        let app = App::new(session(Level::Easy, &["cat"]), &config);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.view().unwrap().masked, "_ _ _");
    }

    #[test]
    fn play_a_round_and_continue() {
        let mut app = App::new(session(Level::Easy, &["cat", "dog"]), &GameConfig::default());
        type_keys(&mut app, "x");
        assert_eq!(app.input_mode, InputMode::ChooseLevel);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        type_keys(&mut app, "e");
        assert_eq!(app.input_mode, InputMode::Guessing);

        let word = app.view().unwrap().masked.len();
        assert_eq!(word, 5);
        type_keys(&mut app, "catdog");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats().rounds_won, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("You win!")));

        type_keys(&mut app, "n");
        assert_eq!(app.input_mode, InputMode::ChooseLevel);
    }

    #[test]
    fn q_is_a_guess_while_playing() {
        let config = GameConfig::default().with_level(Level::Easy);
        let mut app = App::new(session(Level::Easy, &["quiz"]), &config);
        type_keys(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.session().score(), 2);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let config = GameConfig::default().with_level(Level::Easy);
        let mut app = App::new(session(Level::Easy, &["cat"]), &config);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.session().score(), 0);
    }

    #[test]
    fn rejected_guesses_are_logged() {
        let config = GameConfig::default().with_level(Level::Easy);
        let mut app = App::new(session(Level::Easy, &["cat"]), &config);
        type_keys(&mut app, "cc1");
        let errors: Vec<&Message> = app
            .messages
            .iter()
            .filter(|m| m.style == MessageStyle::Error)
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].text.contains("already guessed"));
        assert_eq!(app.session().score(), 2);
    }

    #[test]
    fn end_on_loss_ends_game() {
        let config = GameConfig::default()
            .with_level(Level::Medium)
            .ending_on_loss();
        let mut app = App::new(session(Level::Medium, &["dog"]), &config);
        type_keys(&mut app, "qwerty");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.messages.iter().any(|m| m.text.contains("Press 'n'")));

        type_keys(&mut app, "u");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session().score(), -14);
        let lost = app.messages.iter().filter(|m| m.text.contains("You lost!")).count();
        assert_eq!(lost, 1);

        type_keys(&mut app, "n");
        assert!(!app.should_quit);
        type_keys(&mut app, "q");
        assert!(app.should_quit);
    }

    #[test]
    fn exhausted_fixed_level_ends_game() {
        let config = GameConfig::default().with_level(Level::Easy);
        let mut app = App::new(session(Level::Easy, &["a"]), &config);
        type_keys(&mut app, "a");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        type_keys(&mut app, "n");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(app.messages.last().unwrap().text.contains("has been played"));
    }

    #[test]
    fn message_log_is_capped() {
        let config = GameConfig::default().with_level(Level::Easy);
        let mut app = App::new(session(Level::Easy, &["cat"]), &config);
        for _ in 0..MAX_MESSAGES {
            type_keys(&mut app, "1");
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn unusable_word_list_is_fatal() {
        let config = GameConfig::default().with_level(Level::Hard);
        let mut app = App::new(session(Level::Easy, &["cat"]), &config);
        assert!(app.should_quit);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(matches!(
            app.fatal(),
            Some(GameError::WordList(crate::wordlists::WordListError::Empty(
                Level::Hard
            )))
        ));
        assert!(app.take_fatal().is_some());
        assert!(app.fatal().is_none());
    }

    #[test]
    fn unusable_level_from_picker_is_fatal() {
        let mut app = App::new(session(Level::Easy, &["cat"]), &GameConfig::default());
        type_keys(&mut app, "u");
        assert!(app.should_quit);
        assert!(app.fatal().is_some());
    }

    #[test]
    fn exhausted_level_is_not_fatal() {
        let mut app = App::new(session(Level::Easy, &["a"]), &GameConfig::default());
        type_keys(&mut app, "ean");
        type_keys(&mut app, "e");
        assert_eq!(app.input_mode, InputMode::ChooseLevel);
        assert!(app.fatal().is_none());
        assert!(!app.should_quit);
    }
}
