//! Lexer for colour tag markup.
//!
//! Splits input into literal runs and `<token>content</token>` tags.

use std::collections::HashMap;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text between tags. Never empty.
    Text(&'a str),
    /// A recognized tag: the colour token and the enclosed content.
    Tagged { token: &'a str, content: &'a str },
}

/// Byte positions of a recognized tag within the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TagMatch {
    start: usize,
    end: usize,
    token: (usize, usize),
    content: (usize, usize),
}

/// Ascending start offsets of every `</token>` in the input, per token.
///
/// `next` only moves forward, so each lookup is amortized constant time as
/// long as queries for a token never go backwards.
#[derive(Debug, Default)]
struct Closings {
    offsets: Vec<usize>,
    next: usize,
}

impl Closings {
    /// First closing offset at or after `from`.
    fn first_from(&mut self, from: usize) -> Option<usize> {
        while self.offsets.get(self.next).is_some_and(|&off| off < from) {
            self.next += 1;
        }
        self.offsets.get(self.next).copied()
    }
}

/// Lexer for colour tag markup.
///
/// Tags are matched left to right and never nest: the content of a tag is
/// the shortest run (at least one character, no line breaks) up to a closing
/// tag that repeats the opening token exactly. An opening without such a
/// close is literal text.
///
/// Closing tags are indexed once up front, so lexing is linear in the input
/// length however many openings go unmatched.
///
/// # Examples
///
/// ```
/// use coloured::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("a<red>b</red>c").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Text("a"),
///         Token::Tagged { token: "red", content: "b" },
///         Token::Text("c"),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    pending: Option<TagMatch>,
    closings: HashMap<&'a str, Closings>,
    /// First `\n` at or after the last content start (or input length).
    line_end: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
            closings: index_closings(input),
            line_end: 0,
        }
    }

    /// Find the first tag starting at or after `from`.
    fn find_tag(&mut self, from: usize) -> Option<TagMatch> {
        let mut search = from;
        while let Some(offset) = self.input[search..].find('<') {
            let start = search + offset;
            if let Some(tag) = self.match_tag_at(start) {
                return Some(tag);
            }
            search = start + 1;
        }
        None
    }

    /// Try to match a complete tag whose `<` sits at `start`.
    fn match_tag_at(&mut self, start: usize) -> Option<TagMatch> {
        let input = self.input;
        let token_start = start + 1;
        let token_len = scan_token(&input[token_start..])?;
        let token_end = token_start + token_len;

        if !input[token_end..].starts_with('>') {
            return None;
        }

        let content_start = token_end + 1;
        let first = input[content_start..].chars().next()?;
        let search_from = content_start + first.len_utf8();
        let line_end = self.line_end_from(content_start);

        let token = &input[token_start..token_end];
        let content_end = self.closings.get_mut(token)?.first_from(search_from)?;
        if content_end > line_end {
            return None;
        }

        Some(TagMatch {
            start,
            end: content_end + token_len + 3,
            token: (token_start, token_end),
            content: (content_start, content_end),
        })
    }

    /// Offset of the first line break at or after `at`, or the input length.
    fn line_end_from(&mut self, at: usize) -> usize {
        if self.line_end < at {
            self.line_end = self.input[at..]
                .find('\n')
                .map_or(self.input.len(), |i| at + i);
        }
        self.line_end
    }

    fn tagged(&self, tag: TagMatch) -> Token<'a> {
        Token::Tagged {
            token: &self.input[tag.token.0..tag.token.1],
            content: &self.input[tag.content.0..tag.content.1],
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tag) = self.pending.take() {
            self.pos = tag.end;
            return Some(self.tagged(tag));
        }

        if self.pos >= self.input.len() {
            return None;
        }

        match self.find_tag(self.pos) {
            Some(tag) if tag.start == self.pos => {
                self.pos = tag.end;
                Some(self.tagged(tag))
            }
            Some(tag) => {
                let text = &self.input[self.pos..tag.start];
                self.pos = tag.start;
                self.pending = Some(tag);
                Some(Token::Text(text))
            }
            None => {
                let text = &self.input[self.pos..];
                self.pos = self.input.len();
                Some(Token::Text(text))
            }
        }
    }
}

/// Collect the start offset of every well-formed `</token>` in `input`.
fn index_closings(input: &str) -> HashMap<&str, Closings> {
    let mut closings: HashMap<&str, Closings> = HashMap::new();
    let mut search = 0;
    while let Some(offset) = input[search..].find("</") {
        let start = search + offset;
        let token_start = start + 2;
        if let Some(token_len) = scan_token(&input[token_start..]) {
            let token_end = token_start + token_len;
            if input[token_end..].starts_with('>') {
                closings
                    .entry(&input[token_start..token_end])
                    .or_default()
                    .offsets
                    .push(start);
            }
        }
        search = start + 1;
    }
    closings
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the tag token at the start of `s`.
///
/// A token is either a run of word characters or `#` followed by exactly six
/// word characters. Whether the hex digits are valid is left to the colour
/// resolver.
fn scan_token(s: &str) -> Option<usize> {
    if let Some(rest) = s.strip_prefix('#') {
        let mut len = 1;
        let mut chars = rest.chars();
        for _ in 0..6 {
            let c = chars.next().filter(|c| is_word_char(*c))?;
            len += c.len_utf8();
        }
        return Some(len);
    }

    let len: usize = s
        .chars()
        .take_while(|c| is_word_char(*c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect()
    }

    fn tagged<'a>(token: &'a str, content: &'a str) -> Token<'a> {
        Token::Tagged { token, content }
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("Hello World"), vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn lex_single_tag() {
        assert_eq!(lex("<red>hi</red>"), vec![tagged("red", "hi")]);
    }

    #[test]
    fn lex_hex_tag() {
        assert_eq!(lex("<#FF0000>x</#FF0000>"), vec![tagged("#FF0000", "x")]);
    }

    #[test]
    fn lex_adjacent_tags() {
        assert_eq!(
            lex("<blue>y</blue><red>z</red>"),
            vec![tagged("blue", "y"), tagged("red", "z")]
        );
    }

    #[test]
    fn lex_shortest_content() {
        assert_eq!(
            lex("<red>a</red>-<red>b</red>"),
            vec![tagged("red", "a"), Token::Text("-"), tagged("red", "b")]
        );
    }

    #[test]
    fn lex_close_must_repeat_token() {
        assert_eq!(lex("<red>a</blue>"), vec![Token::Text("<red>a</blue>")]);
        assert_eq!(lex("<RED>a</red>"), vec![Token::Text("<RED>a</red>")]);
    }

    #[test]
    fn lex_empty_content_is_not_a_tag() {
        assert_eq!(lex("<red></red>"), vec![Token::Text("<red></red>")]);
    }

    #[test]
    fn lex_empty_content_extends_to_next_close() {
        // Content needs one character, so the first close is swallowed.
        assert_eq!(
            lex("<red></red></red>"),
            vec![tagged("red", "</red>")]
        );
    }

    #[test]
    fn lex_inner_tags_are_opaque() {
        assert_eq!(
            lex("<red>a<blue>b</blue>c</red>"),
            vec![tagged("red", "a<blue>b</blue>c")]
        );
    }

    #[test]
    fn lex_unterminated_then_valid() {
        assert_eq!(
            lex("<red>x <blue>y</blue>"),
            vec![Token::Text("<red>x "), tagged("blue", "y")]
        );
    }

    #[test]
    fn lex_invalid_tokens() {
        assert_eq!(lex("<>a</>"), vec![Token::Text("<>a</>")]);
        assert_eq!(lex("<re d>a</re d>"), vec![Token::Text("<re d>a</re d>")]);
        assert_eq!(lex("<#FFF>a</#FFF>"), vec![Token::Text("<#FFF>a</#FFF>")]);
    }

    #[test]
    fn lex_hex_shaped_token_with_word_chars() {
        assert_eq!(lex("<#zzzzzz>a</#zzzzzz>"), vec![tagged("#zzzzzz", "a")]);
    }

    #[test]
    fn lex_content_stops_at_line_break() {
        assert_eq!(lex("<red>a\nb</red>"), vec![Token::Text("<red>a\nb</red>")]);
        assert_eq!(lex("<red>\n</red>"), vec![Token::Text("<red>\n</red>")]);
        assert_eq!(
            lex("<red>a\n<red>b</red>"),
            vec![Token::Text("<red>a\n"), tagged("red", "b")]
        );
    }

    #[test]
    fn lex_tags_on_separate_lines() {
        assert_eq!(
            lex("<red>a</red>\n<blue>b</blue>"),
            vec![tagged("red", "a"), Token::Text("\n"), tagged("blue", "b")]
        );
    }

    #[test]
    fn lex_skips_closings_already_passed() {
        assert_eq!(
            lex("</red><red>a</red></red>"),
            vec![Token::Text("</red>"), tagged("red", "a"), Token::Text("</red>")]
        );
    }

    #[test]
    fn index_closings_records_each_token() {
        let closings = index_closings("</red>x</#a1b2c3></red></ bad></>");
        assert_eq!(closings["red"].offsets, vec![0, 17]);
        assert_eq!(closings["#a1b2c3"].offsets, vec![7]);
        assert_eq!(closings.len(), 2);
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            lex("日<green>本</green>語"),
            vec![Token::Text("日"), tagged("green", "本"), Token::Text("語")]
        );
    }

    #[test]
    fn scan_token_lengths() {
        assert_eq!(scan_token("red>"), Some(3));
        assert_eq!(scan_token("#a1b2c3>"), Some(7));
        assert_eq!(scan_token("#a1b2>"), None);
        assert_eq!(scan_token(">"), None);
        assert_eq!(scan_token(""), None);
    }
}
