// citeclean-core/src/lib.rs
//! # citeclean Core Library
//!
//! `citeclean-core` provides the platform-independent logic for removing
//! citation-marker artifacts from text documents: the standalone
//! `[cite_start]` token and bracketed `[cite: ...]` annotations.
//!
//! The library is split along one seam: the [`DocumentStore`] trait abstracts
//! where documents live, while the matcher and processor are pure transforms
//! over whatever the store yields. This keeps the core free of terminal or
//! host concerns and directly testable against in-memory stores.
//!
//! ## Modules
//!
//! * `markers`: the fixed removal pattern and the `has_markers`/`strip_markers` operations.
//! * `store`: the `DocumentStore` trait, `DocumentHandle`, and the filesystem implementation.
//! * `processor`: per-document read/match/backup/overwrite and the sequential batch sweep.
//! * `errors`: structured error types for store and processing failures.
//!
//! ## Usage Example
//!
//! ```no_run
//! use citeclean_core::{sweep, DocumentStore, FsDocumentStore};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = FsDocumentStore::new("./notes", "md");
//!     let handles = store.list_documents().await?;
//!     // The caller is responsible for confirming the destructive sweep first.
//!     let summary = sweep(&store, &handles).await;
//!     println!("modified {}, errors {}", summary.modified, summary.errors);
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior guarantees
//!
//! * A document is rewritten only if it contained at least one marker; clean
//!   documents are never opened for writing and never receive a backup.
//! * The `.bak` sibling, when created, always holds the pre-edit content.
//!   An existing backup is never overwritten.
//! * The batch sweep is strictly sequential and never halts on a single
//!   document's error.
//!
//! License: MIT OR APACHE 2.0

pub mod errors;
pub mod markers;
pub mod processor;
pub mod store;

/// Re-exports the marker-matching operations.
pub use markers::{has_markers, strip_markers};

/// Re-exports the processing entry points and summary types.
pub use processor::{process_document, sweep, Outcome, RunSummary, BACKUP_SUFFIX};

/// Re-exports the document-store seam.
pub use store::{DocumentHandle, DocumentStore, FsDocumentStore};

/// Re-exports the structured error types.
pub use errors::{ProcessError, StoreError};
