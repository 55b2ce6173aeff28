//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Right-pad to a display width, counting wide glyphs (emoji icons) as the
/// terminal renders them rather than by char count.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let padding = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(padding))
}
