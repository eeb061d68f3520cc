//! Colour types and the colour resolver.
//!
//! Supports the eight basic terminal colours by name and `#RRGGBB` hex
//! triplets rendered as 24-bit escapes.

use std::fmt;
use std::str::FromStr;

use crate::ansi::ESC;
use crate::error::ColourParseError;

/// The fixed palette of named colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColour {
    /// Every palette entry, in SGR order.
    pub const ALL: [NamedColour; 8] = [
        NamedColour::Black,
        NamedColour::Red,
        NamedColour::Green,
        NamedColour::Yellow,
        NamedColour::Blue,
        NamedColour::Magenta,
        NamedColour::Cyan,
        NamedColour::White,
    ];

    /// Lower-case palette name.
    pub fn name(self) -> &'static str {
        match self {
            NamedColour::Black => "black",
            NamedColour::Red => "red",
            NamedColour::Green => "green",
            NamedColour::Yellow => "yellow",
            NamedColour::Blue => "blue",
            NamedColour::Magenta => "magenta",
            NamedColour::Cyan => "cyan",
            NamedColour::White => "white",
        }
    }

    /// SGR foreground parameter (30..=37).
    pub fn sgr_code(self) -> u8 {
        30 + self as u8
    }

    /// Look up a palette entry, ignoring ASCII case.
    ///
    /// Only ASCII letters are folded: the palette names are ASCII, and a
    /// token such as `whıte` (dotless i) is not treated as `white`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Nominal RGB value of the palette entry.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColour::Black => (0, 0, 0),
            NamedColour::Red => (255, 0, 0),
            NamedColour::Green => (0, 128, 0),
            NamedColour::Yellow => (255, 255, 0),
            NamedColour::Blue => (0, 0, 255),
            NamedColour::Magenta => (255, 0, 255),
            NamedColour::Cyan => (0, 255, 255),
            NamedColour::White => (255, 255, 255),
        }
    }
}

impl fmt::Display for NamedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A renderable foreground colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Palette colour (e.g., "red", "cyan").
    Named(NamedColour),
    /// 24-bit colour from a `#RRGGBB` token.
    Rgb(u8, u8, u8),
}

impl Colour {
    /// Colour used for untagged text and unresolvable tokens.
    pub const FALLBACK: Colour = Colour::Named(NamedColour::White);

    /// Create an RGB colour.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Colour::Rgb(r, g, b)
    }

    /// Parse a colour token.
    ///
    /// Supports:
    /// - Palette names, case-insensitive: `red`, `Blue`, `CYAN`
    /// - Hex triplets: `#RRGGBB`
    ///
    /// # Examples
    ///
    /// ```
    /// use coloured::{Colour, NamedColour};
    ///
    /// assert_eq!(Colour::parse("Red").unwrap(), Colour::Named(NamedColour::Red));
    /// assert_eq!(Colour::parse("#ff5733").unwrap(), Colour::Rgb(255, 87, 51));
    /// assert!(Colour::parse("bogus").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, ColourParseError> {
        if token.is_empty() {
            return Err(ColourParseError::Empty);
        }

        if let Some(named) = NamedColour::from_name(token) {
            return Ok(Colour::Named(named));
        }

        match token.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex)
                .ok_or_else(|| ColourParseError::InvalidHex(token.to_string())),
            None => Err(ColourParseError::UnknownName(token.to_string())),
        }
    }

    /// Resolve a tag token, falling back to white instead of failing.
    ///
    /// ```
    /// use coloured::Colour;
    ///
    /// assert_eq!(Colour::resolve("#FF0000"), Colour::Rgb(255, 0, 0));
    /// assert_eq!(Colour::resolve("bogus"), Colour::FALLBACK);
    /// ```
    pub fn resolve(token: &str) -> Self {
        Self::parse(token).unwrap_or_else(|err| {
            log::debug!("colour token {:?} unresolved ({}), using fallback", token, err);
            Self::FALLBACK
        })
    }

    /// Parse exactly six hex digits (without the `#`).
    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Colour::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert the colour to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Colour::Named(named) => named.to_rgb(),
            Colour::Rgb(r, g, b) => (*r, *g, *b),
        }
    }

    /// The escape sequence that switches the terminal to this colour.
    pub fn activation(&self) -> String {
        self.to_string()
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::Named(named) => write!(f, "{}[{}m", ESC, named.sgr_code()),
            Colour::Rgb(r, g, b) => write!(f, "{}[38;2;{};{};{}m", ESC, r, g, b),
        }
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NamedColour> for Colour {
    fn from(named: NamedColour) -> Self {
        Colour::Named(named)
    }
}
