//! A single round: one hidden word, a fixed number of attempts

use crate::core::{Feedback, ScoreError, Word, WordError};
use crate::wordlists::VocabEntry;
use thiserror::Error;
use tracing::debug;

/// Default number of attempts per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Reasons a guess is rejected without using an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("Please enter a {expected}-letter word (got {got} letters)")]
    WrongLength { expected: usize, got: usize },
    #[error("The round is already over")]
    Finished,
}

impl From<ScoreError> for RoundError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::LengthMismatch { guess, target } => Self::WrongLength {
                expected: target,
                got: guess,
            },
        }
    }
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One round of the drill
#[derive(Debug, Clone)]
pub struct Round {
    target: VocabEntry,
    max_attempts: usize,
    history: Vec<Attempt>,
    status: RoundStatus,
}

impl Round {
    /// Start a round for `target`
    ///
    /// A `max_attempts` of zero is raised to one.
    #[must_use]
    pub fn new(target: VocabEntry, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts: max_attempts.max(1),
            history: Vec::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Score a guess and record it
    ///
    /// # Errors
    ///
    /// Returns `RoundError` if the round is over, the guess is not a word, or
    /// its length differs from the target. Rejected guesses do not use an
    /// attempt.
    ///
    /// # Examples
    /// ```
    /// use word_drill::core::Word;
    /// use word_drill::game::{Round, RoundStatus};
    /// use word_drill::wordlists::VocabEntry;
    ///
    /// let entry = VocabEntry::new(Word::new("apple").unwrap(), "a fruit");
    /// let mut round = Round::new(entry, 6);
    ///
    /// assert!(round.submit("pear").is_err());
    /// assert!(!round.submit("allee").unwrap().feedback.is_solved());
    /// assert!(round.submit("APPLE").unwrap().feedback.is_solved());
    /// assert_eq!(round.status(), RoundStatus::Won { attempts: 2 });
    /// ```
    pub fn submit(&mut self, guess: &str) -> Result<&Attempt, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::Finished);
        }

        let guess = Word::new(guess)?;
        let feedback = Feedback::calculate(&guess, &self.target.word)?;

        let solved = feedback.is_solved();
        self.history.push(Attempt { guess, feedback });

        let used = self.history.len();
        if solved {
            self.status = RoundStatus::Won { attempts: used };
        } else if used >= self.max_attempts {
            self.status = RoundStatus::Lost;
        }
        debug!(attempt = used, status = ?self.status, "guess scored");

        Ok(&self.history[used - 1])
    }

    #[must_use]
    pub const fn target(&self) -> &VocabEntry {
        &self.target
    }

    /// Number of letters in the hidden word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.word.len()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }
}
