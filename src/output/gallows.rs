//! Gallows ASCII art
//!
//! One stage per incorrect guess: the empty gallows, then head, trunk,
//! left arm, right arm, left leg and right leg, and finally the hanged
//! figure drawn when the round is lost.

/// Number of drawable stages
pub const STAGE_COUNT: usize = 8;

const STAGES: [&str; STAGE_COUNT] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
    r"
  +---+
  |   |
  X   |
 /|\  |
 / \  |
 RIP  |
=========",
];

/// Drawing for a given number of incorrect guesses
///
/// Counts past the last stage keep showing the final drawing.
#[must_use]
pub fn gallows(incorrect: u8) -> &'static str {
    let index = (incorrect as usize).min(STAGE_COUNT - 1);
    STAGES[index].trim_start_matches('\n')
}

/// Drawing split into lines, for widgets that take one line at a time
#[must_use]
pub fn gallows_lines(incorrect: u8) -> Vec<&'static str> {
    gallows(incorrect).lines().collect()
}
