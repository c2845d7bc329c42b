// citeclean/src/ui.rs
//! Status-line helpers for the CLI.
//!
//! Document text goes to stdout; everything a human reads about the run goes
//! to stderr, colored only when stderr is a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io;

/// Prints an informational message to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().green());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Prints a warning message to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().yellow());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Prints an error message to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().red());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}
