//! TUI rendering with ratatui
//!
//! Gallows, word, score panel and message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Level, MAX_INCORRECT};
use crate::game::RoundView;
use crate::output::formatters::letters;
use crate::output::gallows::gallows_lines;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let view = app.view();
    render_board(f, view.as_ref(), main_chunks[0]);
    render_info_panel(f, app, view.as_ref(), main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 H A N G M A N")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, view: Option<&RoundView>, area: Rect) {
    let incorrect = view.map_or(0, |v| v.incorrect_count);
    let gallows_color = if incorrect > MAX_INCORRECT {
        Color::Red
    } else {
        Color::White
    };

    let mut lines: Vec<Line> = gallows_lines(incorrect)
        .into_iter()
        .map(|l| Line::styled(l.to_string(), Style::default().fg(gallows_color)))
        .collect();
    lines.push(Line::from(""));

    if let Some(view) = view {
        let word = view.revealed.as_ref().map_or_else(
            || view.masked.clone(),
            |w| w.chars().map(String::from).collect::<Vec<_>>().join(" "),
        );
        lines.push(Line::from(Span::styled(
            word,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, view: Option<&RoundView>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Score and letters
            Constraint::Length(3), // Lives gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_score(f, app, view, chunks[0]);
    render_lives(f, view, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, view: Option<&RoundView>, area: Rect) {
    let level_line = view.map_or_else(
        || Line::from("Level:  -"),
        |v| {
            Line::from(vec![
                Span::raw("Level:  "),
                Span::styled(
                    v.level.to_string(),
                    Style::default().fg(level_color(v.level)),
                ),
                Span::raw(format!(" (misses x{})", v.level.multiplier())),
            ])
        },
    );

    let (hits, misses) = view.map_or_else(
        || ("-".to_string(), "-".to_string()),
        |v| (letters(&v.hits), letters(&v.misses)),
    );

    let content = vec![
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                app.session().score().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  (round {:+})",
                view.map_or(0, |v| v.round_points)
            )),
        ]),
        level_line,
        Line::from(vec![
            Span::raw("Hits:   "),
            Span::styled(hits, Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Misses: "),
            Span::styled(misses, Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, view: Option<&RoundView>, area: Rect) {
    let total = u16::from(MAX_INCORRECT) + 1;
    let lives = view.map_or(total, |v| u16::from(v.lives_left));
    let color = match lives {
        0..=2 => Color::Red,
        3..=4 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(lives * 100 / total)
        .label(format!("{lives}/{total}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let rows = usize::from(area.height.saturating_sub(2)).max(1);
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(rows)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ChooseLevel => (
            " Choose a Level ",
            "[E]asy  [M]edium  [H]ard  [U]nix",
            Color::Cyan,
        ),
        InputMode::Guessing => (" Your Guess ", "Type a letter A-Z", Color::Yellow),
        InputMode::RoundOver => (
            " Round Over ",
            "Press 'n' for a new round or 'q' to quit",
            Color::Green,
        ),
        InputMode::GameOver => (" Game Over ", "Press 'q' to quit", Color::Red),
    };

    let prompt = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.stats();
    let stats_text = format!(
        "Rounds: {} | Won: {} | Win Rate: {:.0}%",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc/Ctrl-C: Quit",
        _ => "q/Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

const fn level_color(level: Level) -> Color {
    match level {
        Level::Easy => Color::Green,
        Level::Medium => Color::Yellow,
        Level::Hard => Color::LightRed,
        Level::Unix => Color::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringPolicy;
    use crate::game::{GameConfig, Session};
    use crate::wordlists::MemorySource;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(config: &GameConfig) -> App {
        let session = Session::new(
            Box::new(MemorySource::new().with_words(Level::Hard, &["kayak"])),
            ScoringPolicy::default(),
            StdRng::seed_from_u64(0),
        );
        App::new(session, config)
    }

    #[test]
    fn renders_level_picker() {
        let screen = render(&app(&GameConfig::default()));
        assert!(screen.contains("Choose a Level"));
        assert!(screen.contains("[E]asy"));
    }

    #[test]
    fn renders_round_in_progress() {
        let mut app = app(&GameConfig::default().with_level(Level::Hard));
        for c in ['k', 'z'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let screen = render(&app);
        assert!(screen.contains("K _ _ _ K"));
        assert!(screen.contains("Hard"));
        assert!(screen.contains("6/7"));
        assert!(screen.contains("Your Guess"));
    }
}
