// citeclean-core/src/errors.rs
//! Custom error types for the citeclean-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Errors raised by a [`DocumentStore`](crate::store::DocumentStore)
/// implementation.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added
/// in future versions without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    #[error("failed to read document '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to create document '{path}': {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to overwrite document '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to enumerate documents: {0}")]
    List(#[from] std::io::Error),
}

/// Errors raised while processing a single document.
///
/// `Backup` is special-cased by policy: the processor constructs it for
/// diagnostics, logs it, and continues — it never crosses the API boundary.
/// `Read` and `Write` abort the document they belong to.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProcessError {
    #[error("could not load '{path}': {source}")]
    Read { path: String, source: StoreError },

    #[error("backup '{path}' was not written: {source}")]
    Backup { path: String, source: StoreError },

    #[error("could not overwrite '{path}': {source}")]
    Write { path: String, source: StoreError },
}
