//! Benchmark command
//!
//! Plays words automatically with a guessing strategy and measures how a
//! level's list holds up: win rate, misses and score per round.

use crate::core::{Level, MAX_INCORRECT, RoundState, RoundStatus, ScoringPolicy, SecretWord};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of distinct miss counts a round can end with (0..=7)
pub const MISS_BUCKETS: usize = MAX_INCORRECT as usize + 2;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub level: Level,
    pub total_words: usize,
    pub wins: usize,
    pub average_misses: f64,
    pub average_score: f64,
    /// Rounds by miss count; the last bucket holds the lost rounds
    pub miss_distribution: [usize; MISS_BUCKETS],
    /// Words the strategy failed to guess, alphabetically
    pub hardest: Vec<String>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Outcome of one automatically played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedRound {
    pub word: String,
    pub status: RoundStatus,
    pub misses: u8,
    pub points: i64,
}

/// Play `target` to the end, asking `strategy` for every guess
#[must_use]
pub fn play_word<S: Strategy + ?Sized>(
    strategy: &S,
    dictionary: &[SecretWord],
    target: &SecretWord,
    level: Level,
    scoring: ScoringPolicy,
) -> PlayedRound {
    let mut round = RoundState::new(target.clone());
    let mut points = 0;

    while !round.status().is_terminal() {
        let Some(letter) = strategy.next_letter(dictionary, &round) else {
            break;
        };
        match round.guess(letter) {
            Ok(report) => points += scoring.score_delta(report.outcome, level),
            Err(e) => {
                tracing::warn!(%letter, error = %e, "strategy proposed an unusable letter");
                break;
            }
        }
    }

    PlayedRound {
        word: target.text().to_string(),
        status: round.status(),
        misses: round.incorrect_count(),
        points,
    }
}

/// Pick up to `count` distinct words at random
#[must_use]
pub fn sample_targets<R: Rng + ?Sized>(
    words: &[SecretWord],
    count: usize,
    rng: &mut R,
) -> Vec<SecretWord> {
    words.choose_multiple(rng, count).cloned().collect()
}

/// Run the benchmark over `targets`, guessing from `dictionary`
///
/// Rounds are played in parallel.
pub fn run_benchmark<S: Strategy + Sync + ?Sized>(
    strategy: &S,
    dictionary: &[SecretWord],
    targets: &[SecretWord],
    level: Level,
    scoring: ScoringPolicy,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(format!("{level}"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let rounds: Vec<PlayedRound> = targets
        .par_iter()
        .map(|target| {
            let played = play_word(strategy, dictionary, target, level, scoring);
            pb.inc(1);
            played
        })
        .collect();

    pb.finish_with_message("Complete!");

    let result = summarize(level, &rounds, start.elapsed());
    tracing::info!(
        %level,
        words = result.total_words,
        win_rate = result.win_rate(),
        "benchmark finished"
    );
    result
}

fn summarize(level: Level, rounds: &[PlayedRound], duration: Duration) -> BenchmarkResult {
    let total_words = rounds.len();
    let mut miss_distribution = [0; MISS_BUCKETS];
    let mut hardest = Vec::new();
    let mut wins = 0;

    for round in rounds {
        if round.status == RoundStatus::Won {
            wins += 1;
            miss_distribution[usize::from(round.misses).min(MISS_BUCKETS - 2)] += 1;
        } else {
            miss_distribution[MISS_BUCKETS - 1] += 1;
            hardest.push(round.word.clone());
        }
    }
    hardest.sort_unstable();

    let (average_misses, average_score) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        let misses: usize = rounds.iter().map(|r| usize::from(r.misses)).sum();
        let points: i64 = rounds.iter().map(|r| r.points).sum();
        (
            misses as f64 / total_words as f64,
            points as f64 / total_words as f64,
        )
    };

    BenchmarkResult {
        level,
        total_words,
        wins,
        average_misses,
        average_score,
        miss_distribution,
        hardest,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, OrderStrategy, StrategyType};
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::EASY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn play_word_scores_like_a_session() {
        let dict = words_from_slice(&["cat"]);
        let played = play_word(
            &FrequencyStrategy,
            &dict,
            &dict[0],
            Level::Easy,
            ScoringPolicy::default(),
        );
        assert_eq!(played.status, RoundStatus::Won);
        assert_eq!(played.misses, 0);
        assert_eq!(played.points, 6);
    }

    #[test]
    fn order_strategy_can_lose() {
        // E T A O I N S all miss
        let target = SecretWord::new("jump").unwrap();
        let played = play_word(
            &OrderStrategy,
            &[],
            &target,
            Level::Unix,
            ScoringPolicy::default(),
        );
        assert_eq!(played.status, RoundStatus::Lost);
        assert_eq!(played.misses, 7);
        assert_eq!(played.points, -28);
    }

    #[test]
    fn benchmark_distribution_sums_to_total() {
        let words = words_from_slice(&EASY[..20]);
        let strategy = StrategyType::from_name("frequency", None);
        let result = run_benchmark(
            &strategy,
            &words,
            &words,
            Level::Easy,
            ScoringPolicy::default(),
            false,
        );

        assert_eq!(result.total_words, 20);
        assert_eq!(result.miss_distribution.iter().sum::<usize>(), 20);
        assert_eq!(result.wins + result.hardest.len(), result.total_words);
        assert!((0.0..=100.0).contains(&result.win_rate()));
        assert!(result.average_misses <= 7.0);
    }

    #[test]
    fn benchmark_empty_targets() {
        let result = run_benchmark(
            &FrequencyStrategy,
            &[],
            &[],
            Level::Hard,
            ScoringPolicy::default(),
            false,
        );
        assert_eq!(result.total_words, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_score.abs() < f64::EPSILON);
    }

    #[test]
    fn sample_targets_are_distinct_and_capped() {
        let words = words_from_slice(&["ab", "cd", "ef"]);
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(sample_targets(&words, 2, &mut rng).len(), 2);

        let mut all: Vec<String> = sample_targets(&words, 10, &mut rng)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        all.sort();
        assert_eq!(all, vec!["AB", "CD", "EF"]);
    }

    #[test]
    fn seeded_random_benchmark_is_reproducible() {
        let words = words_from_slice(&EASY[..15]);
        let run = || {
            let strategy = StrategyType::from_name("random", Some(8));
            let result = run_benchmark(
                &strategy,
                &words,
                &words,
                Level::Medium,
                ScoringPolicy::default(),
                false,
            );
            (result.wins, result.miss_distribution, result.hardest)
        };
        assert_eq!(run(), run());
    }
}
