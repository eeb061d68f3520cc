//! Segment: a run of raw text paired with its colour.
//!
//! Segments are immutable. Their length is the character count of the raw
//! text and never includes escape sequences.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::ansi::RESET;
use crate::colour::Colour;

/// A coloured chunk of text.
///
/// # Examples
///
/// ```
/// use coloured::{Colour, NamedColour, Segment};
///
/// let seg = Segment::new("hi", Colour::Named(NamedColour::Red));
/// assert_eq!(seg.len(), 2);
/// assert_eq!(seg.to_string(), "\x1b[31mhi\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    text: String,
    colour: Colour,
}

impl Segment {
    /// Creates a segment with the given text and colour.
    pub fn new<S: Into<String>>(text: S, colour: Colour) -> Self {
        Self {
            text: text.into(),
            colour,
        }
    }

    /// Creates a segment in the fallback colour.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(text, Colour::FALLBACK)
    }

    /// Returns the raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the colour.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Number of characters in the raw text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Terminal cell width of the raw text.
    ///
    /// Wide characters (CJK, emoji) occupy two cells, so this can differ
    /// from [`len`](Self::len).
    pub fn cell_width(&self) -> usize {
        self.text.width()
    }

    /// Append activation marker, text and reset marker to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.colour.activation());
        out.push_str(&self.text);
        out.push_str(RESET);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.colour, self.text, RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::NamedColour;

    #[test]
    fn segment_plain_uses_fallback() {
        let seg = Segment::plain("hello");
        assert_eq!(seg.text(), "hello");
        assert_eq!(seg.colour(), Colour::FALLBACK);
    }

    #[test]
    fn len_counts_chars_not_bytes() {
        let seg = Segment::plain("héllo");
        assert_eq!(seg.len(), 5);
        assert_eq!(Segment::plain("日本語").len(), 3);
    }

    #[test]
    fn len_ignores_colour() {
        let named = Segment::new("abc", Colour::Named(NamedColour::Blue));
        let rgb = Segment::new("abc", Colour::rgb(1, 2, 3));
        assert_eq!(named.len(), rgb.len());
    }

    #[test]
    fn cell_width_counts_wide_chars() {
        let seg = Segment::plain("日本");
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.cell_width(), 4);
    }

    #[test]
    fn render_into_matches_display() {
        let seg = Segment::new("x", Colour::rgb(255, 0, 0));
        let mut out = String::new();
        seg.render_into(&mut out);
        assert_eq!(out, "\x1b[38;2;255;0;0mx\x1b[0m");
        assert_eq!(out, seg.to_string());
    }

    #[test]
    fn empty_segment() {
        assert!(Segment::plain("").is_empty());
        assert_eq!(Segment::plain("").len(), 0);
    }
}
