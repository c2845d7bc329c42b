// citeclean-core/src/processor.rs
//! Per-document processing and the sequential batch sweep.
//!
//! A document is rewritten only when it actually contains a marker; untouched
//! documents are never opened for writing and never receive a backup. When a
//! document is rewritten, a `<path>.bak` sibling holding the pre-edit content
//! is attempted first. Backup creation is best-effort: an existing backup (or
//! any other creation failure) is logged and tolerated, while a failed
//! overwrite of the document itself is a real error.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, error, warn};
use serde::Serialize;

use crate::errors::ProcessError;
use crate::markers;
use crate::store::{DocumentHandle, DocumentStore};

/// Suffix appended to a document path to name its backup sibling.
pub const BACKUP_SUFFIX: &str = ".bak";

/// What happened to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document contained no markers and was left alone.
    Skipped,
    /// Markers were removed and the document was overwritten.
    Modified,
}

/// Counts accumulated over one batch sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Documents that were rewritten with markers removed.
    pub modified: usize,
    /// Documents that contained no markers.
    pub skipped: usize,
    /// Documents whose processing failed.
    pub errors: usize,
}

/// Processes one document: read, match-check, backup, overwrite.
///
/// Returns `Outcome::Skipped` without further I/O when the content has no
/// markers. Otherwise writes a `<path>.bak` sibling with the original
/// content (best-effort) and overwrites the document with the stripped
/// content. Only the read and the final overwrite can fail the document.
pub async fn process_document(
    store: &dyn DocumentStore,
    handle: &DocumentHandle,
) -> Result<Outcome, ProcessError> {
    let content = store
        .read(handle)
        .await
        .map_err(|source| ProcessError::Read {
            path: handle.path().to_string(),
            source,
        })?;

    if !markers::has_markers(&content) {
        debug!("No markers in {}; skipping", handle);
        return Ok(Outcome::Skipped);
    }

    let cleaned = markers::strip_markers(&content).into_owned();

    // Tolerated failure: the backup is best-effort and an existing .bak must
    // never be clobbered. Inspect the Result, log, move on.
    let backup_path = format!("{}{}", handle.path(), BACKUP_SUFFIX);
    match store.create(&backup_path, &content).await {
        Ok(()) => debug!("Backup written to {}", backup_path),
        Err(source) => {
            let diag = ProcessError::Backup {
                path: backup_path,
                source,
            };
            warn!("{diag}; continuing without a fresh backup");
        }
    }

    store
        .overwrite(handle, &cleaned)
        .await
        .map_err(|source| ProcessError::Write {
            path: handle.path().to_string(),
            source,
        })?;

    Ok(Outcome::Modified)
}

/// Runs the batch sweep over `handles`, strictly in order.
///
/// Each document completes its full cycle before the next one starts. Errors
/// are caught at the document boundary, logged, and tallied; they never halt
/// the batch, so later documents still get cleaned.
///
/// Callers must have obtained affirmative confirmation before invoking this:
/// no document mutation may begin without it. The confirmation itself is a
/// caller concern (a CLI prompt, a host dialog); this function assumes it
/// already happened.
pub async fn sweep(store: &dyn DocumentStore, handles: &[DocumentHandle]) -> RunSummary {
    let mut summary = RunSummary::default();
    for handle in handles {
        match process_document(store, handle).await {
            Ok(Outcome::Modified) => summary.modified += 1,
            Ok(Outcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                error!("Failed to process {}: {}", handle, e);
                summary.errors += 1;
            }
        }
    }
    summary
}
