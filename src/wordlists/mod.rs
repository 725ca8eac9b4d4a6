//! Vocabulary word lists
//!
//! Provides the embedded vocabulary and the `WordBank` that rounds draw their
//! target words from.

mod embedded;
pub mod loader;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// A word to guess together with its meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: Word,
    pub meaning: String,
}

impl VocabEntry {
    #[must_use]
    pub fn new(word: Word, meaning: impl Into<String>) -> Self {
        Self {
            word,
            meaning: meaning.into(),
        }
    }
}

/// Ordered collection of vocabulary entries without duplicate words
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    entries: Vec<VocabEntry>,
}

impl WordBank {
    /// Build a bank, keeping the first entry for each word
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = VocabEntry>) -> Self {
        let mut seen = FxHashSet::default();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.word.clone()))
            .collect();
        Self { entries }
    }

    /// Build a bank from `(word, meaning)` string pairs, skipping invalid words
    ///
    /// # Examples
    /// ```
    /// use word_drill::wordlists::{VOCABULARY, WordBank};
    ///
    /// let bank = WordBank::from_pairs(VOCABULARY);
    /// assert_eq!(bank.len(), VOCABULARY.len());
    /// ```
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(pairs.iter().filter_map(|&(word, meaning)| {
            Word::new(word)
                .ok()
                .map(|word| VocabEntry::new(word, meaning))
        }))
    }

    /// The built-in vocabulary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(VOCABULARY)
    }

    #[must_use]
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a random entry, `None` if the bank is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&VocabEntry> {
        self.entries.choose(rng)
    }

    /// Only the entries whose word has exactly `length` letters
    #[must_use]
    pub fn with_length(&self, length: usize) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.word.len() == length)
                .cloned()
                .collect(),
        }
    }

    /// Word count per word length, ordered by length
    #[must_use]
    pub fn lengths(&self) -> BTreeMap<usize, usize> {
        let mut lengths = BTreeMap::new();
        for entry in &self.entries {
            *lengths.entry(entry.word.len()).or_insert(0) += 1;
        }
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn vocabulary_count_matches_const() {
        assert_eq!(VOCABULARY.len(), VOCABULARY_COUNT);
    }

    #[test]
    fn vocabulary_words_are_valid() {
        for &(word, meaning) in VOCABULARY {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not valid");
            assert!(!meaning.is_empty(), "Word '{word}' has no meaning");
        }
    }

    #[test]
    fn builtin_has_no_duplicates() {
        assert_eq!(WordBank::builtin().len(), VOCABULARY_COUNT);
    }

    #[test]
    fn duplicates_keep_first_entry() {
        let bank = WordBank::from_pairs(&[("apple", "fruit"), ("APPLE", "other"), ("calm", "")]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.entries()[0].meaning, "fruit");
    }

    #[test]
    fn from_pairs_skips_invalid_words() {
        let bank = WordBank::from_pairs(&[("apple", "fruit"), ("ice cream", "dessert"), ("", "")]);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn with_length_filters() {
        let bank = WordBank::from_pairs(&[("apple", ""), ("calm", ""), ("brave", "")]);
        let five = bank.with_length(5);
        assert_eq!(five.len(), 2);
        assert!(five.entries().iter().all(|e| e.word.len() == 5));
        assert!(bank.with_length(9).is_empty());
    }

    #[test]
    fn lengths_counts_per_length() {
        let bank = WordBank::from_pairs(&[("apple", ""), ("calm", ""), ("brave", "")]);
        let lengths: Vec<_> = bank.lengths().into_iter().collect();
        assert_eq!(lengths, vec![(4, 1), (5, 2)]);
    }

    #[test]
    fn choose_returns_member() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let entry = bank.choose(&mut rng).unwrap();
            assert!(bank.entries().contains(entry));
        }
    }

    #[test]
    fn choose_on_empty_bank() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(WordBank::default().choose(&mut rng).is_none());
    }
}
