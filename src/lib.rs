//! Hangman
//!
//! Terminal Hangman with four difficulty levels, per-level scoring and
//! round-based play, plus an automatic guesser for benchmarking word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Level, ScoringPolicy};
//! use hangman::game::Session;
//! use hangman::wordlists::MemorySource;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let source = MemorySource::new().with_words(Level::Easy, &["cat"]);
//! let mut session = Session::new(
//!     Box::new(source),
//!     ScoringPolicy::default(),
//!     StdRng::seed_from_u64(1),
//! );
//!
//! session.start_round(Level::Easy).unwrap();
//! for letter in ["c", "a", "t"] {
//!     session.guess(letter).unwrap();
//! }
//! assert_eq!(session.score(), 6);
//! ```

// Core domain types
pub mod core;

// Sessions, rounds and the game loop
pub mod game;

// Word lists
pub mod wordlists;

// Automatic guessing strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
