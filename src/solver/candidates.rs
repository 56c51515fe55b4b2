//! Candidate filtering
//!
//! Narrows a dictionary to the words that agree with what a round has
//! revealed so far, and counts how many of them contain each letter.

use crate::core::{Letter, RoundState, SecretWord};

/// Words consistent with the revealed pattern and the misses
///
/// A candidate has the same length as the secret word, carries every
/// revealed letter at its position, and has no guessed letter at any
/// hidden position (a guessed letter present in the word would already
/// be revealed everywhere).
#[must_use]
pub fn filter_candidates<'a>(
    dictionary: &'a [SecretWord],
    round: &RoundState,
) -> Vec<&'a SecretWord> {
    let revealed = round.revealed();

    dictionary
        .iter()
        .filter(|candidate| {
            candidate.len() == revealed.len()
                && candidate
                    .text()
                    .bytes()
                    .zip(&revealed)
                    .all(|(b, slot)| match (Letter::from_byte(b), slot) {
                        (Some(letter), Some(shown)) => letter == *shown,
                        (Some(letter), None) => !round.has_guessed(letter),
                        (None, _) => false,
                    })
        })
        .collect()
}

/// For each letter A-Z, the number of candidates containing it
#[must_use]
pub fn letter_counts(candidates: &[&SecretWord]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for word in candidates {
        let mut seen = [false; 26];
        for b in word.text().bytes() {
            let idx = usize::from(b - b'A');
            if !seen[idx] {
                seen[idx] = true;
                counts[idx] += 1;
            }
        }
    }
    counts
}
