//! Console display for the drill
//!
//! Feedback lines go through a `Typewriter` so they can be revealed one
//! character at a time. Banners and result lines are written directly.

use super::formatters::{GlyphSet, spaced_letters};
use crate::commands::{LengthSummary, ScoreResult};
use crate::core::Feedback;
use crate::wordlists::VocabEntry;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Writes text to an output, optionally pausing between characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Typewriter {
    delay: Duration,
}

impl Typewriter {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Writes everything at once
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Write `text` followed by a newline
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn println<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        self.print(out, text)?;
        writeln!(out)
    }

    /// Write `text` without a newline, flushing after each character when paced
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn print<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            write!(out, "{text}")?;
            return out.flush();
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            if !ch.is_whitespace() {
                thread::sleep(self.delay);
            }
        }
        Ok(())
    }
}

/// Print the welcome banner, the loaded word count and the rules
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_welcome<W: Write>(
    out: &mut W,
    word_count: usize,
    max_attempts: usize,
    glyphs: GlyphSet,
) -> io::Result<()> {
    let noun = if word_count == 1 { "word" } else { "words" };
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "WORD DRILL".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "Loaded {word_count} {noun}.")?;
    writeln!(out, "Guess the hidden word in {max_attempts} attempts.")?;
    writeln!(out, "{}\n", glyphs.legend())?;
    Ok(())
}

/// Print the feedback line for one attempt
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_feedback<W: Write>(
    out: &mut W,
    typewriter: &Typewriter,
    glyphs: GlyphSet,
    feedback: &Feedback,
) -> io::Result<()> {
    typewriter.println(out, &glyphs.render(feedback))
}

/// Print the win line with the revealed meaning
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_win<W: Write>(out: &mut W, entry: &VocabEntry, attempts: usize) -> io::Result<()> {
    let tries = if attempts == 1 { "attempt" } else { "attempts" };
    writeln!(
        out,
        "{} {}",
        format!("🎉 Correct in {attempts} {tries}!").green().bold(),
        reveal(entry)
    )
}

/// Print the loss line with the answer
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_loss<W: Write>(out: &mut W, entry: &VocabEntry) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "Out of attempts. The answer was:".red().bold(),
        reveal(entry)
    )
}

/// `WORD - meaning`, or just `WORD` when there is no meaning
#[must_use]
pub fn reveal(entry: &VocabEntry) -> String {
    let word = entry.word.text().to_uppercase();
    if entry.meaning.is_empty() {
        word
    } else {
        format!("{word} - {}", entry.meaning)
    }
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult, glyphs: GlyphSet) {
    println!(
        "{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    if glyphs == GlyphSet::Marks {
        println!("{}", spaced_letters(result.guess.text()));
    }
    println!("{}", glyphs.render(&result.feedback));
    if result.feedback.is_solved() {
        println!("{}", "Solved!".green().bold());
    }
}

/// Print the word counts per length
pub fn print_length_summary(summary: &LengthSummary) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "WORD LENGTHS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for &(length, count) in &summary.lengths {
        let pct = (count as f64 / summary.total_words as f64) * 100.0;
        let bar_width = (pct / 5.0) as usize;
        println!(
            "  {length:2} letters: {} {count:4} ({pct:5.1}%)",
            "█".repeat(bar_width).green()
        );
    }
    println!("\n  Total words: {}", summary.total_words);
}
