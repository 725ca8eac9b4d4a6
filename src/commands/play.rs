//! Interactive play command

use crate::game::{Session, SessionConfig};
use crate::wordlists::WordBank;
use anyhow::{Result, bail};
use std::io;

/// Run a console session on stdin/stdout
///
/// # Errors
///
/// Returns an error if a configured word length has no words in the bank, or
/// on an I/O error while reading input or writing output.
pub fn run_play(bank: &WordBank, config: SessionConfig) -> Result<()> {
    if let Some(length) = config.word_length
        && bank.with_length(length).is_empty()
    {
        let available: Vec<String> = bank.lengths().keys().map(ToString::to_string).collect();
        bail!(
            "No {length}-letter words in the word list (available lengths: {})",
            available.join(", ")
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    Session::new(bank, config, rand::rng()).run(&mut input, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_length_is_rejected_before_prompting() {
        let bank = WordBank::from_pairs(&[("apple", "fruit")]);
        let config = SessionConfig {
            word_length: Some(3),
            ..SessionConfig::default()
        };

        let err = run_play(&bank, config).unwrap_err();
        assert!(err.to_string().contains("available lengths: 5"));
    }
}
