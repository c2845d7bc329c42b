// citeclean/src/cli.rs
//! This file defines the command-line interface (CLI) for the citeclean
//! application, including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "citeclean",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove cite markers from text documents",
    long_about = "Citeclean is a command-line utility for removing citation-marker artifacts from text documents: the standalone [cite_start] token and bracketed [cite: ...] annotations. It can clean a single document from a file or stdin, or sweep a whole directory of notes in place, preserving each edited document in a .bak sibling.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'citeclean' to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `citeclean` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Removes cite markers from a single document read from a file or stdin.
    #[command(about = "Removes cite markers from a single document read from a file or stdin.")]
    Clean(CleanCommand),

    /// Sweeps a directory tree, rewriting every matching document in place with a .bak backup.
    #[command(about = "Sweeps a directory tree, rewriting every matching document in place with a .bak backup.")]
    Sweep(SweepCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write cleaned output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sweep` command.
#[derive(Parser, Debug)]
pub struct SweepCommand {
    /// The directory whose documents should be swept.
    #[arg(value_name = "DIR", help = "The directory whose documents should be swept.")]
    pub dir: PathBuf,

    /// File extension selecting which documents to process.
    #[arg(long = "ext", value_name = "EXT", default_value = "md", help = "File extension selecting which documents to process (defaults to 'md').")]
    pub extension: String,

    /// Proceed without the interactive confirmation prompt.
    #[arg(long, short = 'y', help = "Proceed with the sweep without a confirmation prompt.")]
    pub yes: bool,

    /// Print the run summary as JSON to stdout.
    #[arg(long = "json", help = "Print the run summary as JSON to stdout instead of the human-readable line.")]
    pub json: bool,
}
