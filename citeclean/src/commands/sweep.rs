// citeclean/src/commands/sweep.rs
//! Sweep command implementation: the bulk path.
//!
//! Enumerates every matching document under a directory and rewrites each one
//! in place, keeping a `.bak` sibling with the pre-edit content. Because this
//! mutates many documents at once, no document is touched before the user has
//! affirmatively confirmed the sweep (or passed `--yes`).

use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use citeclean_core::{sweep, DocumentStore, FsDocumentStore, RunSummary};

use crate::ui::{info_msg, warn_msg};

/// Options for the sweep command runner.
pub struct SweepOptions {
    pub dir: PathBuf,
    pub extension: String,
    pub yes: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Runs the bulk path: gate, enumerate, sweep, report.
pub async fn run_sweep(opts: SweepOptions) -> Result<()> {
    info!("Starting sweep over {}", opts.dir.display());

    let store = FsDocumentStore::new(&opts.dir, opts.extension.clone());
    let handles = store
        .list_documents()
        .await
        .with_context(|| format!("Failed to enumerate documents under {}", opts.dir.display()))?;

    if handles.is_empty() {
        if opts.json {
            println!("{}", serde_json::to_string(&RunSummary::default())?);
        } else if !opts.quiet {
            info_msg(format!(
                "No '.{}' documents found under {}.",
                opts.extension,
                opts.dir.display()
            ));
        }
        return Ok(());
    }

    // Safety gate: nothing is read or written until the sweep is confirmed.
    if !opts.yes && !confirm_sweep(handles.len(), &opts.dir)? {
        info_msg("Sweep cancelled. No documents were touched.");
        return Ok(());
    }

    if !opts.quiet {
        info_msg(format!("Processing {} file(s)...", handles.len()));
    }

    let summary = sweep(&store, &handles).await;

    if opts.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else if !opts.quiet {
        info_msg(format!(
            "Complete! Processed: {}, Errors: {}",
            summary.modified, summary.errors
        ));
        if summary.errors > 0 {
            warn_msg("Some documents could not be processed; see the log for details.");
        }
    }

    info!("Sweep completed: {:?}", summary);
    Ok(())
}

/// Asks for a yes/no confirmation on stderr, reading the answer from stdin.
///
/// Only an explicit "y"/"yes" proceeds; anything else (including EOF)
/// declines.
fn confirm_sweep(count: usize, dir: &Path) -> Result<bool> {
    warn_msg(format!(
        "Remove cite markers from all {} matching file(s) under '{}'? .bak files will be created.",
        count,
        dir.display()
    ));
    eprint!("Proceed? [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation from stdin")?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
