//! Command implementations

pub mod benchmark;
pub mod levels;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use levels::{LevelInfo, level_overview};
pub use simple::{ConsolePrompter, ConsoleReporter, play_console, run_simple};
