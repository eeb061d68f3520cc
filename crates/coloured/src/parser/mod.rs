//! Parser for colour tag markup.
//!
//! This module contains the tag lexer and the driver that turns its tokens
//! into coloured segments.

mod lexer;
mod markup;

pub use lexer::{Lexer, Token};
pub use markup::parse;
