//! ColouredText: the ordered segment sequence produced by the parser.

use std::fmt;
use std::slice;

use crate::segment::Segment;

/// The result of parsing colour tag markup.
///
/// The segments partition the parsed input: concatenating their raw text
/// gives the input back unchanged.
///
/// # Examples
///
/// ```
/// use coloured::ColouredText;
///
/// let text = ColouredText::parse("<red>Hello</red> World");
/// assert_eq!(text.len(), 2);
/// assert_eq!(text.visible_length(), 11);
/// assert_eq!(text.render(), "\x1b[31mHello\x1b[0m\x1b[37m World\x1b[0m");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColouredText {
    segments: Vec<Segment>,
}

impl ColouredText {
    /// Wrap an already built segment sequence.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse colour tag markup. See [`crate::parser::parse`].
    pub fn parse(input: &str) -> Self {
        crate::parser::parse(input)
    }

    /// Get all segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments (empty input).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total characters of raw text, escape sequences excluded.
    pub fn visible_length(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// Total terminal cell width of the raw text.
    pub fn cell_width(&self) -> usize {
        self.segments.iter().map(Segment::cell_width).sum()
    }

    /// Raw text of every segment, concatenated.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Render every segment as activation marker, text, reset marker.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.render_into(&mut out);
        }
        out
    }
}

impl fmt::Display for ColouredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ColouredText {
    type Item = &'a Segment;
    type IntoIter = slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for ColouredText {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{Colour, NamedColour};

    #[test]
    fn empty_text() {
        let text = ColouredText::default();
        assert!(text.is_empty());
        assert_eq!(text.visible_length(), 0);
        assert_eq!(text.render(), "");
    }

    #[test]
    fn visible_length_sums_segments() {
        let text = ColouredText::new(vec![
            Segment::plain("ab"),
            Segment::new("cde", Colour::Named(NamedColour::Red)),
        ]);
        assert_eq!(text.len(), 2);
        assert_eq!(text.visible_length(), 5);
        assert_eq!(text.plain_text(), "abcde");
    }

    #[test]
    fn render_matches_display() {
        let text = ColouredText::new(vec![
            Segment::new("y", Colour::Named(NamedColour::Blue)),
            Segment::new("z", Colour::rgb(0, 0, 0)),
        ]);
        assert_eq!(text.render(), "\x1b[34my\x1b[0m\x1b[38;2;0;0;0mz\x1b[0m");
        assert_eq!(text.render(), text.to_string());
    }

    #[test]
    fn iterates_in_order() {
        let text = ColouredText::new(vec![Segment::plain("a"), Segment::plain("b")]);
        let borrowed: Vec<&str> = text.iter().map(Segment::text).collect();
        assert_eq!(borrowed, vec!["a", "b"]);

        let owned: Vec<Segment> = text.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
