//! Word representation
//!
//! A Word stores a lowercase ASCII letter sequence of any non-zero length.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A canonicalized (lowercase) word made only of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains a character that is not an ASCII letter: {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use word_drill::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text = text.to_ascii_lowercase();
        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        letter_counts(&self.letters)
    }
}

/// Build the letter multiset of a sequence
pub(crate) fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
