//! Colour text in the terminal using colour tags.
//!
//! ```
//! use coloured_text::ColouredText;
//!
//! let text = ColouredText::parse("Build <green>passed</green> in <#808080>3s</#808080>");
//! assert_eq!(text.visible_length(), 18);
//! println!("{}", text);
//! ```
//!
//! Set `COLOURED_TEXT_LOG` and call [`init_from_env`] to record which tag
//! tokens fell back to white.

pub mod error;
pub mod log_init;

pub use coloured::{ansi, parser, Colour, ColourParseError, ColouredText, NamedColour, Segment};
pub use error::{ColouredTextError, Result};
pub use log_init::{init_from_env, init_logger};

// Re-export the log crate so users can use coloured_text::log::info!, etc.
pub use log;

/// Parse markup and render it in one step.
///
/// ```
/// assert_eq!(coloured_text::render("<red>hi</red>"), "\x1b[31mhi\x1b[0m");
/// ```
pub fn render(markup: &str) -> String {
    ColouredText::parse(markup).render()
}
