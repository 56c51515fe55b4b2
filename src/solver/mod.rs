//! Automatic player
//!
//! Letter-picking strategies used to benchmark word lists.

mod candidates;
pub mod strategy;

pub use candidates::{filter_candidates, letter_counts};
pub use strategy::{FrequencyStrategy, OrderStrategy, RandomStrategy, Strategy, StrategyType};
