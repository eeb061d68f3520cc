//! Colour tag parser for terminal text.
//!
//! This crate turns text like `a<red>b</red>c` into an ordered sequence of
//! coloured segments that renders to a single string carrying ANSI escapes.
//!
//! # Overview
//!
//! Tags wrap a span of text in a colour token:
//!
//! - `<red>text</red>` - Palette colour, name matched case-insensitively
//! - `<#ff5733>text</#ff5733>` - 24-bit colour from a hex triplet
//! - The closing tag repeats the opening token exactly
//! - Tags do not nest; an inner tag is literal content
//!
//! Text outside tags, and tags whose token is not a known colour, is
//! coloured white. Parsing never fails: anything that is not a complete tag
//! is kept as literal text.
//!
//! # Usage
//!
//! ```
//! use coloured::{ansi, Colour, ColouredText, NamedColour};
//!
//! let text = ColouredText::parse("a<red>b</red>c");
//! assert_eq!(text.len(), 3);
//! assert_eq!(text.visible_length(), 3);
//! assert_eq!(text.segments()[1].colour(), Colour::Named(NamedColour::Red));
//!
//! let rendered = text.render();
//! assert_eq!(ansi::strip(&rendered), "abc");
//! ```

pub mod ansi;
pub mod colour;
pub mod error;
pub mod parser;
pub mod segment;
pub mod text;

// Re-export main types at crate root
pub use colour::{Colour, NamedColour};
pub use error::ColourParseError;
pub use segment::Segment;
pub use text::ColouredText;
