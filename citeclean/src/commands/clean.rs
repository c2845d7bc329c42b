// citeclean/src/commands/clean.rs
//! Clean command implementation: the single-document path.
//!
//! Reads one document from a file or stdin, strips cite markers, and writes
//! the result to stdout or a file. The status line is derived directly from
//! the match check: "No cite markers found." vs "Cite markers removed."
//! There is no in-place rewrite and no backup here; in-place editing with
//! backups is the sweep command's job.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::ui::info_msg;

/// Options for the clean command runner.
pub struct CleanOptions {
    pub input_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// Runs the single-document path.
pub async fn run_clean(opts: CleanOptions) -> Result<()> {
    info!("Starting clean operation.");

    let input = match &opts.input_file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read from stdin")?;
            buf
        }
    };

    let had_markers = citeclean_core::has_markers(&input);
    let cleaned = citeclean_core::strip_markers(&input);

    debug!(
        "Input length: {}, cleaned length: {}",
        input.len(),
        cleaned.len()
    );

    match &opts.output {
        Some(path) => {
            tokio::fs::write(path, cleaned.as_bytes())
                .await
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if !opts.quiet {
                info_msg(format!("Cleaned content written to {}", path.display()));
            }
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(cleaned.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    if !opts.quiet {
        if had_markers {
            info_msg("Cite markers removed.");
        } else {
            info_msg("No cite markers found.");
        }
    }

    info!("Clean operation completed.");
    Ok(())
}
