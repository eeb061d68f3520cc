//! Segment builder for colour tag markup.
//!
//! Drives the lexer and resolves each tag token to a colour.

use crate::colour::Colour;
use crate::segment::Segment;
use crate::text::ColouredText;

use super::lexer::{Lexer, Token};

/// Parses colour tag markup into a [`ColouredText`].
///
/// This is the main entry point for parsing. It never fails: malformed or
/// unterminated tags are kept as literal text, and unknown tokens colour
/// their content with [`Colour::FALLBACK`].
///
/// # Examples
///
/// ```
/// use coloured::parser::parse;
///
/// let text = parse("a<red>b</red>c");
/// assert_eq!(text.len(), 3);
/// assert_eq!(text.plain_text(), "abc");
/// ```
pub fn parse(input: &str) -> ColouredText {
    let segments = Lexer::new(input).map(segment_for).collect();
    ColouredText::new(segments)
}

fn segment_for(token: Token<'_>) -> Segment {
    match token {
        Token::Text(text) => Segment::plain(text),
        Token::Tagged { token, content } => {
            let colour = Colour::resolve(token);
            log::trace!(
                "tag <{}> -> {:?} over {} chars",
                token,
                colour,
                content.chars().count()
            );
            Segment::new(content, colour)
        }
    }
}
