//! Command implementations

pub mod lengths;
pub mod play;
pub mod score;

pub use lengths::{LengthSummary, summarize_lengths};
pub use play::run_play;
pub use score::{ScoreResult, score_words};
