//! Core domain types for the drill
//!
//! Words, verdicts and the guess scorer. Everything here is pure: no I/O and
//! no shared state.

mod feedback;
mod word;

pub use feedback::{Feedback, ScoreError, Verdict, score};
pub use word::{Word, WordError};
