//! Word Drill
//!
//! A vocabulary drilling game: guess a hidden word in a fixed number of
//! attempts with Wordle-style per-letter feedback, then learn its meaning.
//!
//! # Quick Start
//!
//! ```rust
//! use word_drill::core::{Feedback, Verdict, Word};
//!
//! let guess = Word::new("pelap").unwrap();
//! let target = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target).unwrap();
//! assert!(feedback.iter().all(|v| v == Verdict::Present));
//! ```

// Core domain types
pub mod core;

// Rounds and the console session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
