/// ANSI color helper constants for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
