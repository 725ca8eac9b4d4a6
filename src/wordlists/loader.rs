//! Vocabulary file loading
//!
//! A vocabulary file holds one `word<TAB>meaning` row per line. Rows without a
//! tab may use a comma instead, and a bare word has an empty meaning. Blank
//! lines and lines starting with `#` are ignored.

use super::{VocabEntry, WordBank};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error loading a vocabulary file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No usable words found in {}", .path.display())]
    Empty { path: PathBuf },
}

/// Load a word bank from a file
///
/// Rows whose word is not a valid `Word` are skipped with a warning.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Empty`
/// if it contains no valid rows.
///
/// # Examples
/// ```no_run
/// use word_drill::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("words.tsv").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = parse_vocabulary(&content);
    if bank.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), words = bank.len(), "loaded vocabulary file");
    Ok(bank)
}

/// Parse vocabulary rows from text
#[must_use]
pub fn parse_vocabulary(content: &str) -> WordBank {
    WordBank::new(
        content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| parse_row(index + 1, line)),
    )
}

fn parse_row(line_number: usize, line: &str) -> Option<VocabEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (word, meaning) = trimmed
        .split_once('\t')
        .or_else(|| trimmed.split_once(','))
        .unwrap_or((trimmed, ""));

    match Word::new(word) {
        Ok(word) => Some(VocabEntry::new(word, meaning.trim())),
        Err(e) => {
            warn!(line = line_number, word, error = %e, "skipping vocabulary row");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_tab_and_comma_rows() {
        let bank = parse_vocabulary("Apple\ta round fruit\nbrave,ready to face danger\n");
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.entries()[0].word.text(), "apple");
        assert_eq!(bank.entries()[0].meaning, "a round fruit");
        assert_eq!(bank.entries()[1].meaning, "ready to face danger");
    }

    #[test]
    fn tab_takes_precedence_over_comma() {
        let bank = parse_vocabulary("serene\tcalm, peaceful and untroubled\n");
        assert_eq!(bank.entries()[0].meaning, "calm, peaceful and untroubled");
    }

    #[test]
    fn bare_word_has_empty_meaning() {
        let bank = parse_vocabulary("ocean\n");
        assert_eq!(bank.entries()[0].meaning, "");
    }

    #[test]
    fn skips_comments_blanks_and_invalid_rows() {
        let bank = parse_vocabulary(
            "# header\n\n  \nice cream\tdessert\nr2d2\trobot\ncalm\tpeaceful\n",
        );
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.entries()[0].word.text(), "calm");
    }

    #[test]
    fn load_from_file_reads_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "meadow\ta field of grass").unwrap();
        writeln!(file, "dusk\tevening twilight").unwrap();

        let bank = load_from_file(file.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.lengths().get(&4), Some(&1));
    }

    #[test]
    fn load_from_file_without_words_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(LoadError::Empty { .. })
        ));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.tsv");

        assert!(matches!(
            load_from_file(&missing),
            Err(LoadError::Io { .. })
        ));
    }
}
