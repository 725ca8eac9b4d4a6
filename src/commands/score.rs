//! One-shot scoring command
//!
//! Scores a single guess against a given target without playing a round.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let feedback = Feedback::calculate(&guess, &target)?;

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Hit, Present};

    #[test]
    fn scores_mixed_case_input() {
        let result = score_words("ALLEE", "apple").unwrap();
        assert_eq!(result.guess.text(), "allee");
        assert_eq!(
            result.feedback.verdicts(),
            &[Hit, Present, Absent, Absent, Hit]
        );
    }

    #[test]
    fn length_mismatch_is_error() {
        let err = score_words("apples", "apple").unwrap_err();
        assert!(err.to_string().contains("6 letters"));
    }

    #[test]
    fn invalid_word_is_error() {
        let err = score_words("app le", "apple").unwrap_err();
        assert!(err.to_string().contains("Invalid guess"));
    }
}
