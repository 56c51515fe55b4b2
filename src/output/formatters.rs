//! Formatting utilities for terminal output

use crate::core::{Letter, MAX_INCORRECT};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hearts for the lives left in a round
#[must_use]
pub fn lives_bar(lives_left: u8) -> String {
    let total = usize::from(MAX_INCORRECT) + 1;
    let lives = usize::from(lives_left).min(total);
    format!("{}{}", "♥".repeat(lives), "·".repeat(total - lives))
}

/// Join letters with spaces, or a dash when there are none
#[must_use]
pub fn letters(list: &[Letter]) -> String {
    if list.is_empty() {
        return "-".to_string();
    }
    list.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a point delta with an explicit sign
#[must_use]
pub fn signed(points: i64) -> String {
    format!("{points:+}")
}
