//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations used by the
//! automatic player.

use super::candidates::{filter_candidates, letter_counts};
use crate::core::{Letter, RoundState, SecretWord};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// English letters, most frequent first
pub const ENGLISH_ORDER: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select the next letter for `round`, using `dictionary` as the pool
    /// of possible secret words
    ///
    /// Returns `None` only when every letter has been guessed.
    fn next_letter(&self, dictionary: &[SecretWord], round: &RoundState) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among consistent candidates (default)
    Frequency(FrequencyStrategy),
    /// Fixed English frequency order
    Order(OrderStrategy),
    /// Random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_letter(&self, dictionary: &[SecretWord], round: &RoundState) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.next_letter(dictionary, round),
            Self::Order(s) => s.next_letter(dictionary, round),
            Self::Random(s) => s.next_letter(dictionary, round),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "order", "random".
    /// Defaults to frequency if name is unrecognized. `seed` fixes the
    /// random strategy's choices; `None` draws a fresh seed.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "order" | "english" => Self::Order(OrderStrategy),
            "random" => Self::Random(
                seed.map_or_else(RandomStrategy::from_entropy, RandomStrategy::new),
            ),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Order(_) => "order",
            Self::Random(_) => "random",
        }
    }
}

/// Guess the letter contained in the most remaining candidates
///
/// Falls back to English order when the dictionary has no consistent word.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter(&self, dictionary: &[SecretWord], round: &RoundState) -> Option<Letter> {
        let candidates = filter_candidates(dictionary, round);
        let counts = letter_counts(&candidates);

        // Ties go to the earlier letter in ENGLISH_ORDER
        let best = ENGLISH_ORDER
            .iter()
            .filter_map(|&b| Letter::from_byte(b))
            .filter(|&l| !round.has_guessed(l))
            .map(|l| (l, counts[usize::from(l.byte() - b'A')]))
            .fold(None, |best: Option<(Letter, usize)>, (l, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((l, n)),
            });

        match best {
            Some((letter, n)) if n > 0 => Some(letter),
            _ => OrderStrategy.next_letter(dictionary, round),
        }
    }
}

/// Guess letters in fixed English frequency order
pub struct OrderStrategy;

impl Strategy for OrderStrategy {
    fn next_letter(&self, _dictionary: &[SecretWord], round: &RoundState) -> Option<Letter> {
        ENGLISH_ORDER
            .iter()
            .filter_map(|&b| Letter::from_byte(b))
            .find(|&l| !round.has_guessed(l))
    }
}

/// Guess a random unguessed letter
///
/// Each pick is seeded from the strategy seed and the round so far, so a
/// given seed replays the same game for the same word in any thread.
pub struct RandomStrategy {
    seed: u64,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    fn rng_for(&self, round: &RoundState) -> StdRng {
        let mut guessed: Vec<Letter> = round.guessed().iter().copied().collect();
        guessed.sort_unstable();

        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        round.word().text().hash(&mut hasher);
        guessed.hash(&mut hasher);
        StdRng::seed_from_u64(hasher.finish())
    }
}

impl Strategy for RandomStrategy {
    fn next_letter(&self, _dictionary: &[SecretWord], round: &RoundState) -> Option<Letter> {
        let remaining: Vec<Letter> = (b'A'..=b'Z')
            .filter_map(Letter::from_byte)
            .filter(|&l| !round.has_guessed(l))
            .collect();
        remaining.choose(&mut self.rng_for(round)).copied()
    }
}
