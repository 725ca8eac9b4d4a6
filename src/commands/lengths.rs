//! Word-length summary of a word list

use crate::wordlists::WordBank;

/// Word counts per length
#[derive(Debug)]
pub struct LengthSummary {
    pub total_words: usize,
    pub lengths: Vec<(usize, usize)>,
}

#[must_use]
pub fn summarize_lengths(bank: &WordBank) -> LengthSummary {
    LengthSummary {
        total_words: bank.len(),
        lengths: bank.lengths().into_iter().collect(),
    }
}
