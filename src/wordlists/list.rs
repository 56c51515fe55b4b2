//! Per-level word list with random selection

use super::source::{WordListError, WordSource};
use crate::core::{Level, SecretWord};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable candidate words for one level
#[derive(Debug, Clone)]
pub struct WordList {
    level: Level,
    words: Vec<SecretWord>,
}

impl WordList {
    /// Wrap a collection of words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(level: Level, words: Vec<SecretWord>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty(level));
        }
        Ok(Self { level, words })
    }

    /// Load the list for `level` from a source
    ///
    /// # Errors
    /// Returns `WordListError` if the source cannot be read or yields no
    /// valid words.
    pub fn load(source: &dyn WordSource, level: Level) -> Result<Self, WordListError> {
        let words = source.load(level)?;
        tracing::debug!(%level, count = words.len(), source = %source.describe(), "loaded word list");
        Self::new(level, words)
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    /// Draw a word uniformly at random
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the list holds no words.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&SecretWord, WordListError> {
        self.words
            .choose(rng)
            .ok_or(WordListError::Empty(self.level))
    }

    /// Draw uniformly among words whose text is not in `used`
    ///
    /// Returns `None` once every word has been used.
    pub fn pick_unused<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        used: &FxHashSet<String>,
    ) -> Option<&SecretWord> {
        let fresh: Vec<&SecretWord> = self
            .words
            .iter()
            .filter(|w| !used.contains(w.text()))
            .collect();
        fresh.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{EmbeddedSource, MemorySource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(Level::Easy, words_from_slice(words)).unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        let err = WordList::new(Level::Medium, Vec::new()).unwrap_err();
        assert!(matches!(err, WordListError::Empty(Level::Medium)));
    }

    #[test]
    fn load_from_empty_source_is_empty_error() {
        let source = MemorySource::new();
        let err = WordList::load(&source, Level::Unix).unwrap_err();
        assert!(matches!(err, WordListError::Empty(Level::Unix)));
    }

    #[test]
    fn pick_random_returns_member() {
        let words = list(&["apple", "berry", "cherry"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = words.pick_random(&mut rng).unwrap();
            assert!(words.words().contains(picked));
        }
    }

    #[test]
    fn pick_random_is_reproducible_with_seed() {
        let words = WordList::load(&EmbeddedSource, Level::Hard).unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                words.pick_random(&mut a).unwrap(),
                words.pick_random(&mut b).unwrap()
            );
        }
    }

    #[test]
    fn pick_random_covers_all_words_eventually() {
        let words = list(&["one", "two", "three"]);
        let mut rng = StdRng::seed_from_u64(1);
        let seen: FxHashSet<String> = (0..200)
            .map(|_| words.pick_random(&mut rng).unwrap().text().to_string())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn pick_unused_skips_used_words() {
        let words = list(&["apple", "berry", "cherry"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut used = FxHashSet::default();
        used.insert("APPLE".to_string());
        used.insert("CHERRY".to_string());

        for _ in 0..10 {
            assert_eq!(words.pick_unused(&mut rng, &used).unwrap().text(), "BERRY");
        }

        used.insert("BERRY".to_string());
        assert!(words.pick_unused(&mut rng, &used).is_none());
    }
}
