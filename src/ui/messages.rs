use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}✅ {}{}", FG_GREEN, BOLD, RESET, msg);
}

/// Warnings go to stderr so they never mix into a rendered timeline or a
/// --json dump on stdout.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}⚠️  {}{}", FG_YELLOW, BOLD, RESET, msg);
}
