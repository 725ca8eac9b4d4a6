//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use std::fmt;
use std::str::FromStr;

/// Glyphs used to render feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// ✓ ○ ×
    #[default]
    Marks,
    /// 🟩 🟨 ⬜
    Tiles,
}

impl GlyphSet {
    /// Glyph for a single verdict
    #[must_use]
    pub const fn glyph(self, verdict: Verdict) -> char {
        match (self, verdict) {
            (Self::Marks, Verdict::Hit) => '✓',
            (Self::Marks, Verdict::Present) => '○',
            (Self::Marks, Verdict::Absent) => '×',
            (Self::Tiles, Verdict::Hit) => '🟩',
            (Self::Tiles, Verdict::Present) => '🟨',
            (Self::Tiles, Verdict::Absent) => '⬜',
        }
    }

    /// Render a whole feedback line
    ///
    /// Marks are space separated, tiles are packed.
    ///
    /// # Examples
    /// ```
    /// use word_drill::core::{Word, Feedback};
    /// use word_drill::output::GlyphSet;
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("allee").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(GlyphSet::Marks.render(&feedback), "✓ ○ × × ✓");
    /// assert_eq!(GlyphSet::Tiles.render(&feedback), "🟩🟨⬜⬜🟩");
    /// ```
    #[must_use]
    pub fn render(self, feedback: &Feedback) -> String {
        let glyphs = feedback.iter().map(|v| self.glyph(v));
        match self {
            Self::Marks => glyphs.map(String::from).collect::<Vec<_>>().join(" "),
            Self::Tiles => glyphs.collect(),
        }
    }

    /// One-line explanation of the glyphs
    #[must_use]
    pub fn legend(self) -> String {
        format!(
            "{}: right letter, right spot   {}: in the word, wrong spot   {}: not in the word",
            self.glyph(Verdict::Hit),
            self.glyph(Verdict::Present),
            self.glyph(Verdict::Absent)
        )
    }
}

impl FromStr for GlyphSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "marks" | "mark" | "plain" => Ok(Self::Marks),
            "tiles" | "tile" | "emoji" => Ok(Self::Tiles),
            _ => Err(format!("Unknown glyph set: {s} (expected 'marks' or 'tiles')")),
        }
    }
}

impl fmt::Display for GlyphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marks => write!(f, "marks"),
            Self::Tiles => write!(f, "tiles"),
        }
    }
}

/// Spell a word with spaced uppercase letters, aligned with `Marks` output
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn marks_all_hit() {
        assert_eq!(GlyphSet::Marks.render(&feedback("apple", "apple")), "✓ ✓ ✓ ✓ ✓");
    }

    #[test]
    fn tiles_all_absent() {
        assert_eq!(GlyphSet::Tiles.render(&feedback("xyzzz", "apple")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn parse_glyph_set_names() {
        assert_eq!("marks".parse::<GlyphSet>(), Ok(GlyphSet::Marks));
        assert_eq!("Emoji".parse::<GlyphSet>(), Ok(GlyphSet::Tiles));
        assert!("colors".parse::<GlyphSet>().is_err());
    }

    #[test]
    fn legend_mentions_every_glyph() {
        let legend = GlyphSet::Marks.legend();
        assert!(legend.contains('✓') && legend.contains('○') && legend.contains('×'));
    }

    #[test]
    fn spaced_letters_uppercase() {
        assert_eq!(spaced_letters("calm"), "C A L M");
    }
}
