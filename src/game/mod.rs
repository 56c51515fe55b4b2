//! Game orchestration
//!
//! `Session` holds cross-round state; `GameLoop` runs rounds against
//! abstract input and output collaborators.

mod config;
mod events;
mod runner;
mod session;
mod stats;

pub use config::GameConfig;
pub use events::{GameEvent, RoundSummary, RoundView, ScoredGuess};
pub use runner::{GameLoop, Prompter, Reporter};
pub use session::{ActiveRound, GameError, Session};
pub use stats::Statistics;
