//! Terminal output formatting
//!
//! Glyph rendering for feedback and console display helpers.

pub mod display;
pub mod formatters;

pub use display::{
    Typewriter, print_feedback, print_length_summary, print_loss, print_score_result,
    print_welcome, print_win,
};
pub use formatters::GlyphSet;
