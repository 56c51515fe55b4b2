//! Hangman - CLI
//!
//! Terminal Hangman with a full-screen TUI, a line-based console mode and a
//! benchmark for the automatic guesser.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{level_overview, run_benchmark, run_simple, sample_targets},
    core::{Level, ScoringPolicy},
    game::{GameConfig, Session},
    logging::init_logging,
    output::{display::print_game_over, print_benchmark_result, print_levels},
    solver::StrategyType,
    wordlists::{DirectorySource, EmbeddedSource, WordList, WordSource},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

/// Accepted values for `--reward` and `--penalty`
const SCORE_RANGE: std::ops::RangeInclusive<i64> = -1000..=1000;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal Hangman with four difficulty levels and round-based scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play every round at this level: easy, medium, hard or unix
    #[arg(short, long, global = true)]
    level: Option<Level>,

    /// Directory with easy.txt, medium.txt, hard.txt and unix.txt
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Seed for word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Points for a correct guess
    #[arg(
        long,
        global = true,
        default_value_t = 2,
        value_parser = clap::value_parser!(i64).range(SCORE_RANGE)
    )]
    reward: i64,

    /// Base points for an incorrect guess, multiplied by the level
    #[arg(
        long,
        global = true,
        default_value_t = -1,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(SCORE_RANGE)
    )]
    penalty: i64,

    /// Stop the game after the first lost round
    #[arg(long, global = true)]
    end_on_loss: bool,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Show the word lists behind each level
    Levels,

    /// Let the automatic guesser play words and report how it does
    Benchmark {
        /// Number of random words to play per level
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Strategy: frequency (default), order, random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            level: self.level,
            scoring: ScoringPolicy::new(self.reward, self.penalty),
            end_on_loss: self.end_on_loss,
            seed: self.seed,
        }
    }

    fn source(&self) -> Box<dyn WordSource> {
        match &self.words_dir {
            Some(dir) => Box::new(DirectorySource::new(dir)),
            None => Box::new(EmbeddedSource),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so it gets no log output
    if !matches!(command, Commands::Play) {
        init_logging(cli.verbose);
    }

    let config = cli.config();
    let source = cli.source();

    match command {
        Commands::Play => run_play_command(source, &config),
        Commands::Simple => {
            run_simple(source, &config)?;
            Ok(())
        }
        Commands::Levels => run_levels_command(source.as_ref()),
        Commands::Benchmark { count, strategy } => {
            run_benchmark_command(source.as_ref(), &config, *count, strategy)
        }
    }
}

fn run_play_command(source: Box<dyn WordSource>, config: &GameConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let session = Session::from_config(source, config);
    let mut app = run_tui(App::new(session, config))?;

    if let Some(e) = app.take_fatal() {
        return Err(anyhow::Error::new(e).context("Game aborted"));
    }

    let session = app.session();
    print_game_over(&mut io::stdout(), session.score(), session.stats())?;
    Ok(())
}

fn run_levels_command(source: &dyn WordSource) -> Result<()> {
    let levels = level_overview(source).context("Failed to load word lists")?;
    print_levels(&levels, &source.describe());
    Ok(())
}

fn run_benchmark_command(
    source: &dyn WordSource,
    config: &GameConfig,
    count: usize,
    strategy_name: &str,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name, config.seed);
    let levels = config.level.map_or(Level::ALL.to_vec(), |level| vec![level]);
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    for level in levels {
        let list = WordList::load(source, level)
            .with_context(|| format!("Failed to load the {level} word list"))?;
        let targets = sample_targets(list.words(), count, &mut rng);

        println!(
            "Running benchmark on {} {level} words with the {} strategy...",
            targets.len(),
            strategy.name()
        );
        let result = run_benchmark(
            &strategy,
            list.words(),
            &targets,
            level,
            config.scoring,
            true,
        );
        print_benchmark_result(&result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_flags_accept_values_in_range() {
        let cli = Cli::try_parse_from(["hangman", "--reward", "5", "--penalty", "-3"]).unwrap();
        assert_eq!(cli.config().scoring, ScoringPolicy::new(5, -3));
    }

    #[test]
    fn scoring_flags_reject_extreme_values() {
        assert!(Cli::try_parse_from(["hangman", "--reward", "5000"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "--penalty", "-9223372036854775808"]).is_err());
    }
}
