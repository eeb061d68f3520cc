//! ANSI SGR markers.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Escape character that starts every control sequence.
pub const ESC: char = '\x1b';

/// Cancels any active colour.
pub const RESET: &str = "\x1b[0m";

static SGR_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid")
});

/// Remove SGR sequences, leaving only the visible text.
///
/// Borrows the input when it contains no sequences.
///
/// ```
/// use coloured::ansi::strip;
///
/// assert_eq!(strip("\x1b[31mhi\x1b[0m"), "hi");
/// ```
pub fn strip(rendered: &str) -> Cow<'_, str> {
    SGR_SEQUENCE.replace_all(rendered, "")
}
