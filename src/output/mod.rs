//! Styled terminal output for `sdk-version`.
//!
//! Uses `anstyle` for ANSI style definitions and `anstream` for auto-detecting
//! terminal capabilities. Output degrades to plain text when piped.
//!
//! Diagnostics (errors and warnings) go to stderr; results go to stdout.

mod styles;

use std::io::Write;

pub use styles::clap_styles;

use styles::{ERROR, SUCCESS, WARNING};

/// Print a success message (green checkmark prefix).
pub fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{SUCCESS}✓{SUCCESS:#} {msg}").ok();
}

/// Print a fatal diagnostic to stderr (red X prefix).
pub fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Print a warning to stderr (yellow exclamation prefix).
pub fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

/// Print plain text to stdout (for output meant to be consumed by scripts).
pub fn plain(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{msg}").ok();
}
