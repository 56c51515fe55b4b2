//! Display functions for game events and command results

use super::formatters::{create_progress_bar, letters, lives_bar, signed};
use super::gallows::gallows;
use crate::commands::{BenchmarkResult, LevelInfo};
use crate::core::{GuessError, Outcome, RoundStatus};
use crate::game::{RoundSummary, RoundView, ScoredGuess, Statistics};
use colored::Colorize;
use std::io::{self, Write};

const WIDTH: usize = 60;

/// Print the title banner and the rules
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    H A N G M A N                         ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the secret word one letter at a time.")?;
    writeln!(out, "  - Correct guesses earn points regardless of level")?;
    writeln!(out, "  - Wrong guesses cost more on harder levels (x1 to x4)")?;
    writeln!(out, "  - Seven wrong guesses and the round is lost\n")?;
    writeln!(out, "Press Ctrl-C at any time to quit.\n")
}

/// Print the level menu
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_level_menu<W: Write>(out: &mut W, levels: &[LevelInfo]) -> io::Result<()> {
    let entries: Vec<String> = levels
        .iter()
        .map(|info| {
            format!(
                "[{}] {} ({} words)",
                info.level.shortcut().to_string().bright_yellow().bold(),
                info.level,
                info.word_count
            )
        })
        .collect();
    writeln!(out, "{}", entries.join("  "))
}

/// Print the gallows, the masked word and the letters tried so far
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_view<W: Write>(out: &mut W, view: &RoundView) -> io::Result<()> {
    writeln!(out, "\n{}", gallows(view.incorrect_count).bright_black())?;
    writeln!(out, "\nWord:   {}", view.masked.bright_white().bold())?;
    writeln!(
        out,
        "Lives:  {}   Misses: {}",
        lives_bar(view.lives_left).red(),
        letters(&view.misses).yellow()
    )?;
    writeln!(out, "Score:  {}", view.score.to_string().bright_cyan())
}

/// Print the start-of-round header
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_started<W: Write>(out: &mut W, view: &RoundView) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(WIDTH).cyan())?;
    writeln!(
        out,
        "New round: {} level, {} letters",
        view.level.to_string().bright_yellow().bold(),
        view.masked.split(' ').count()
    )?;
    writeln!(out, "{}", "─".repeat(WIDTH).cyan())?;
    print_round_view(out, view)
}

/// Print the result of an accepted guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_guess<W: Write>(out: &mut W, scored: &ScoredGuess) -> io::Result<()> {
    let letter = scored.report.letter;
    let delta = signed(scored.delta);
    match scored.report.outcome {
        Outcome::Correct => {
            let message = if scored.report.occurrences == 1 {
                format!("There is 1 \"{letter}\"!")
            } else {
                format!("There are {} \"{letter}\"s!", scored.report.occurrences)
            };
            writeln!(out, "\n✅ {} {}", message.green().bold(), delta.green())?;
        }
        Outcome::Incorrect => {
            writeln!(
                out,
                "\n❌ {} {}",
                format!("No \"{letter}\" in the word.").red().bold(),
                delta.red()
            )?;
        }
    }

    if scored.summary.is_none() {
        print_round_view(out, &scored.view)?;
    }
    Ok(())
}

/// Print why a guess was not accepted
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_rejected<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "⚠️  {}", error.to_string().yellow())
}

/// Print the end-of-round banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_ended<W: Write>(out: &mut W, summary: &RoundSummary) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(WIDTH).bright_cyan())?;
    match summary.status {
        RoundStatus::Won => {
            writeln!(out, "{}", "    🎉  Y O U   W I N !  🎉".bright_green().bold())?;
            let grade = match summary.incorrect_count {
                0 => "Flawless!",
                1..=2 => "Well played!",
                3..=5 => "Got there!",
                _ => "Phew, that was close!",
            };
            writeln!(out, "  {}", grade.bright_yellow())?;
        }
        RoundStatus::Lost | RoundStatus::InProgress => {
            writeln!(out, "{}", gallows(summary.incorrect_count).red())?;
            writeln!(out, "{}", "    💀  Y O U   L O S T  💀".bright_red().bold())?;
        }
    }
    writeln!(
        out,
        "\n  The word was \"{}\".",
        summary.word.bright_white().bold()
    )?;
    writeln!(
        out,
        "  Round: {}   Total: {}",
        signed(summary.round_points),
        summary.score.to_string().bright_cyan().bold()
    )?;
    writeln!(out, "{}", "═".repeat(WIDTH).bright_cyan())
}

/// Print the final score and statistics
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_game_over<W: Write>(out: &mut W, score: i64, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", format!("{:-^WIDTH$}", " Game over. ").cyan())?;
    writeln!(out, "Points: {}", score.to_string().bright_yellow().bold())?;
    if stats.rounds_played > 0 {
        writeln!(
            out,
            "Rounds: {} played, {} won ({:.0}%)",
            stats.rounds_played,
            stats.rounds_won,
            stats.win_rate()
        )?;
        if let Some(best) = stats.best_round {
            writeln!(out, "Best round: {}", signed(best))?;
        }
    }
    writeln!(out, "\n👋 Thanks for playing!\n")
}

/// Print the word list overview
pub fn print_levels(levels: &[LevelInfo], source: &str) {
    println!("\n{}", "═".repeat(WIDTH).cyan());
    println!(" {} ({source})", "LEVELS".bright_cyan().bold());
    println!("{}", "═".repeat(WIDTH).cyan());

    let max_words = levels.iter().map(|l| l.word_count).max().unwrap_or(0);
    for info in levels {
        let bar = create_progress_bar(info.word_count as f64, max_words as f64, 24);
        println!(
            "  [{}] {:<7} x{}  {} {:>6} words  (avg {:.1} letters)",
            info.level.shortcut().to_string().bright_yellow().bold(),
            info.level.to_string(),
            info.level.multiplier(),
            bar.green(),
            info.word_count,
            info.average_length
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(WIDTH).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.level.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(WIDTH).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Average score:    {:+.2}", result.average_score);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    for (misses, &count) in result.miss_distribution.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        let label = if misses > usize::from(crate::core::MAX_INCORRECT) {
            "lost".to_string()
        } else {
            misses.to_string()
        };
        println!("   {label:>4}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Lost words:".bright_cyan().bold());
        for word in result.hardest.iter().take(10) {
            println!("   • {}", word.bright_white());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    fn view() -> RoundView {
        RoundView {
            level: Level::Easy,
            masked: "C _ T".to_string(),
            hits: Vec::new(),
            misses: Vec::new(),
            incorrect_count: 2,
            lives_left: 5,
            status: RoundStatus::InProgress,
            round_points: 0,
            score: 12,
            revealed: None,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn round_view_shows_word_and_score() {
        let text = render(|out| print_round_view(out, &view()));
        assert!(text.contains("C _ T"));
        assert!(text.contains("12"));
        assert!(text.contains("+---+"));
    }

    #[test]
    fn round_started_counts_letters() {
        let text = render(|out| print_round_started(out, &view()));
        assert!(text.contains("3 letters"));
        assert!(text.contains("Easy"));
    }

    #[test]
    fn round_ended_reveals_word() {
        let summary = RoundSummary {
            level: Level::Unix,
            word: "DOG".to_string(),
            status: RoundStatus::Lost,
            incorrect_count: 7,
            round_points: -28,
            score: -28,
        };
        let text = render(|out| print_round_ended(out, &summary));
        assert!(text.contains("DOG"));
        assert!(text.contains("-28"));
        assert!(text.contains("RIP"));
    }

    #[test]
    fn game_over_reports_points() {
        let mut stats = Statistics::default();
        stats.record_round(RoundStatus::Won, 0, 6);
        let text = render(|out| print_game_over(out, 6, &stats));
        assert!(text.contains("Game over."));
        assert!(text.contains("Points: "));
        assert!(text.contains("1 played, 1 won"));
    }
}
