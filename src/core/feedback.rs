//! Per-letter feedback for a guess
//!
//! Scoring follows Wordle's rules for repeated letters: exact matches are
//! reserved first, then the remaining letter budget of the target is spent on
//! misplaced letters from left to right.

use super::Word;
use super::word::letter_counts;
use std::fmt;
use thiserror::Error;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter correct and in the correct position
    Hit,
    /// Letter exists in the target but not at this position
    Present,
    /// Letter not available in the target
    Absent,
}

/// Error returned when a guess cannot be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Ordered verdicts for one guess, aligned with the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use word_drill::core::{Feedback, Verdict::*, Word};
    ///
    /// let guess = Word::new("allee").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.verdicts(), &[Hit, Present, Absent, Absent, Hit]);
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, ScoreError> {
        score(guess.letters(), target.letters())
    }

    /// The verdicts in guess order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Hit)
    }

    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.count(Verdict::Hit)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Verdict::Present)
    }

    fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a Verdict;
    type IntoIter = std::slice::Iter<'a, Verdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            let ch = match verdict {
                Verdict::Hit => 'H',
                Verdict::Present => 'P',
                Verdict::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Score a guess letter sequence against a target letter sequence
///
/// Both sequences must already be case-normalized. Empty sequences score to
/// an empty feedback.
///
/// # Algorithm
/// 1. Build the remaining-count multiset of the target
/// 2. First pass: mark exact position matches as hits and consume them
/// 3. Second pass: mark misplaced letters as present while budget remains
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the sequences differ in length.
pub fn score(guess: &[char], target: &[char]) -> Result<Feedback, ScoreError> {
    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut verdicts = vec![Verdict::Absent; guess.len()];
    let mut remaining = letter_counts(target);

    // First pass: exact positions
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            verdicts[i] = Verdict::Hit;
            if let Some(count) = remaining.get_mut(g) {
                *count -= 1;
            }
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, g) in guess.iter().enumerate() {
        if verdicts[i] == Verdict::Hit {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            verdicts[i] = Verdict::Present;
            *count -= 1;
        }
    }

    Ok(Feedback(verdicts))
}
