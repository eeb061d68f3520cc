//! Error types for colour tokens.
//!
//! Only the strict [`Colour::parse`](crate::Colour::parse) API reports these.
//! Tag parsing never fails: unresolvable tokens fall back to white.

use thiserror::Error;

/// Errors that can occur when parsing a colour token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    /// The token was empty.
    #[error("empty colour token")]
    Empty,

    /// Not a name in the palette.
    #[error("unknown colour name: {0}")]
    UnknownName(String),

    /// `#` prefixed, but not exactly six hex digits.
    #[error("invalid hex colour: {0}")]
    InvalidHex(String),
}
