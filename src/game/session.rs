//! Console session: repeated rounds with prompting and replay
//!
//! Input and output are generic so the whole flow can be driven from a script.

use super::round::{DEFAULT_MAX_ATTEMPTS, Round, RoundStatus};
use crate::output::{GlyphSet, Typewriter, print_feedback, print_loss, print_welcome, print_win};
use crate::wordlists::WordBank;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Configuration for a play session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub glyphs: GlyphSet,
    pub typewriter: Typewriter,
    /// Fixed word length; `None` shows the length menu when several exist
    pub word_length: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            glyphs: GlyphSet::default(),
            typewriter: Typewriter::instant(),
            word_length: None,
        }
    }
}

/// Interactive drill over a word bank
pub struct Session<'a, G: Rng> {
    bank: &'a WordBank,
    config: SessionConfig,
    rng: G,
}

impl<'a, G: Rng> Session<'a, G> {
    #[must_use]
    pub const fn new(bank: &'a WordBank, config: SessionConfig, rng: G) -> Self {
        Self { bank, config, rng }
    }

    /// Play rounds until the player declines to continue or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<()> {
        print_welcome(
            out,
            self.bank.len(),
            self.config.max_attempts,
            self.config.glyphs,
        )?;

        if self.bank.is_empty() {
            writeln!(out, "No words loaded, cannot start the game.")?;
            return Ok(());
        }

        let mut rounds = 0usize;
        loop {
            if prompt(input, out, "Press Enter to start...")?.is_none() {
                break;
            }

            let Some(pool) = self.select_pool(input, out)? else {
                break;
            };
            let Some(entry) = pool.choose(&mut self.rng).cloned() else {
                writeln!(out, "No words available for that length.")?;
                break;
            };

            rounds += 1;
            debug!(round = rounds, word = %entry.word, "starting round");
            let mut round = Round::new(entry, self.config.max_attempts);
            if !self.play_round(&mut round, input, out)? {
                break;
            }

            match ask_continue(input, out)? {
                Some(true) => {}
                Some(false) => {
                    writeln!(out, "Thanks for practising, goodbye!")?;
                    break;
                }
                None => break,
            }
        }

        info!(rounds, "session finished");
        Ok(())
    }

    /// Words to draw from: the configured length, a menu choice, or everything
    ///
    /// Returns `None` if input ended at the menu.
    fn select_pool<I: BufRead, O: Write>(
        &self,
        input: &mut I,
        out: &mut O,
    ) -> io::Result<Option<WordBank>> {
        if let Some(length) = self.config.word_length {
            return Ok(Some(self.bank.with_length(length)));
        }

        let lengths = self.bank.lengths();
        if lengths.len() <= 1 {
            return Ok(Some(self.bank.clone()));
        }

        writeln!(out, "\nChoose a word length:")?;
        for (length, count) in &lengths {
            writeln!(out, "  {length} letters ({count} words)")?;
        }

        loop {
            let Some(choice) = prompt(input, out, "Length (Enter for any): ")? else {
                return Ok(None);
            };
            if choice.is_empty() {
                return Ok(Some(self.bank.clone()));
            }
            match choice.parse::<usize>() {
                Ok(length) if lengths.contains_key(&length) => {
                    return Ok(Some(self.bank.with_length(length)));
                }
                _ => writeln!(out, "Please choose one of the listed lengths.")?,
            }
        }
    }

    /// Returns `false` if input ended mid-round
    fn play_round<I: BufRead, O: Write>(
        &self,
        round: &mut Round,
        input: &mut I,
        out: &mut O,
    ) -> io::Result<bool> {
        writeln!(out, "\nGuess the {}-letter word.", round.word_length())?;

        while !round.status().is_over() {
            let label = format!(
                "Attempt {} ({} left): ",
                round.attempts_used() + 1,
                round.attempts_left()
            );
            let Some(guess) = prompt(input, out, &label)? else {
                return Ok(false);
            };

            match round.submit(&guess) {
                Ok(attempt) => print_feedback(
                    out,
                    &self.config.typewriter,
                    self.config.glyphs,
                    &attempt.feedback,
                )?,
                Err(e) => writeln!(out, "{e}")?,
            }
        }

        match round.status() {
            RoundStatus::Won { attempts } => print_win(out, round.target(), attempts)?,
            RoundStatus::Lost => print_loss(out, round.target())?,
            RoundStatus::InProgress => {}
        }
        Ok(true)
    }
}

/// Ask whether to play again; `None` on end of input
fn ask_continue<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> io::Result<Option<bool>> {
    loop {
        let Some(answer) = prompt(input, out, "Play again? (y/n): ")? else {
            return Ok(None);
        };
        match answer.as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(out, "Please enter y or n.")?,
        }
    }
}

/// Print a prompt and read one trimmed, lowercased line; `None` on end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(bank: &WordBank, config: SessionConfig, script: &str) -> String {
        colored::control::set_override(false);
        let mut session = Session::new(bank, config, StdRng::seed_from_u64(42));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn apple_bank() -> WordBank {
        WordBank::from_pairs(&[("apple", "a round fruit")])
    }

    #[test]
    fn win_reveals_meaning() {
        let out = play(&apple_bank(), SessionConfig::default(), "\nallee\napple\nn\n");

        assert!(out.contains("Loaded 1 word."));
        assert!(out.contains("Guess the 5-letter word."));
        assert!(out.contains("✓ ○ × × ✓"));
        assert!(out.contains("Correct in 2 attempts!"));
        assert!(out.contains("APPLE - a round fruit"));
        assert!(out.contains("goodbye"));
    }

    #[test]
    fn loss_after_all_attempts() {
        let config = SessionConfig {
            max_attempts: 2,
            ..SessionConfig::default()
        };
        let out = play(&apple_bank(), config, "\nxyzzz\nxyzzz\nn\n");

        assert!(out.contains("Attempt 2 (1 left): "));
        assert!(out.contains("The answer was: APPLE - a round fruit"));
        assert!(!out.contains("Attempt 3"));
    }

    #[test]
    fn invalid_guesses_reprompt_without_using_attempts() {
        let out = play(&apple_bank(), SessionConfig::default(), "\npear\nap9le\napple\nn\n");

        assert!(out.contains("Please enter a 5-letter word (got 4 letters)"));
        assert!(out.contains("Invalid guess"));
        assert!(out.contains("Correct in 1 attempt!"));
    }

    #[test]
    fn replay_plays_another_round() {
        let out = play(
            &apple_bank(),
            SessionConfig::default(),
            "\napple\nmaybe\ny\n\napple\nn\n",
        );

        assert_eq!(out.matches("Correct in 1 attempt!").count(), 2);
        assert!(out.contains("Please enter y or n."));
    }

    #[test]
    fn length_menu_filters_words() {
        let bank = WordBank::from_pairs(&[("apple", "fruit"), ("calm", "peaceful")]);
        let out = play(&bank, SessionConfig::default(), "\n9\n4\ncalm\nn\n");

        assert!(out.contains("4 letters (1 words)"));
        assert!(out.contains("Please choose one of the listed lengths."));
        assert!(out.contains("Guess the 4-letter word."));
        assert!(out.contains("CALM - peaceful"));
    }

    #[test]
    fn configured_length_skips_menu() {
        let bank = WordBank::from_pairs(&[("apple", "fruit"), ("calm", "peaceful")]);
        let config = SessionConfig {
            word_length: Some(5),
            glyphs: GlyphSet::Tiles,
            ..SessionConfig::default()
        };
        let out = play(&bank, config, "\neppla\npelap\napple\nn\n");

        assert!(!out.contains("Choose a word length"));
        assert!(out.contains("🟨🟩🟩🟩🟨"));
        assert!(out.contains("🟨🟨🟨🟨🟨"));
        assert!(out.contains("APPLE - fruit"));
    }

    #[test]
    fn configured_length_without_words() {
        let config = SessionConfig {
            word_length: Some(7),
            ..SessionConfig::default()
        };
        let out = play(&apple_bank(), config, "\n");

        assert!(out.contains("No words available for that length."));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let out = play(&apple_bank(), SessionConfig::default(), "\nallee\n");

        assert!(out.contains("WORD DRILL"));
        assert!(!out.contains("Correct"));
    }

    #[test]
    fn empty_bank_does_not_start() {
        let out = play(&WordBank::default(), SessionConfig::default(), "\n");
        assert!(out.contains("No words loaded"));
    }
}
