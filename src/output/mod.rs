//! Terminal output formatting
//!
//! Gallows art, formatting helpers, and display functions for game events
//! and command results.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{print_benchmark_result, print_levels};
pub use gallows::gallows;
