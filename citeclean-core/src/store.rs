// citeclean-core/src/store.rs
//! Defines the `DocumentStore` trait and its filesystem implementation.
//!
//! The `DocumentStore` trait is the seam between the processing logic and
//! whatever owns the documents. The processor only ever reads, creates, and
//! overwrites through this trait, which keeps the core testable against
//! in-memory stores and interchangeable with other backends.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::errors::StoreError;

/// A stable identifier for one document in a store.
///
/// Stores hand these out from [`DocumentStore::list_documents`]; the path is
/// a plain string so backup siblings can be derived by suffix concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentHandle(String);

impl DocumentHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The document's path within its store.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trait that defines the document-storage contract the processor consumes.
///
/// Implementations decide where documents live and what enumeration order
/// means; the processor treats the order of `list_documents` as the
/// processing order and makes no further ordering assumptions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Enumerates the documents this store manages, in processing order.
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>, StoreError>;

    /// Loads the full textual content of a document.
    async fn read(&self, handle: &DocumentHandle) -> Result<String, StoreError>;

    /// Creates a new document at `path` with the given content.
    ///
    /// Must fail with [`StoreError::Create`] when a document already exists
    /// at that path; callers rely on create-new semantics so an existing
    /// backup is never clobbered.
    async fn create(&self, path: &str, text: &str) -> Result<(), StoreError>;

    /// Replaces an existing document's content.
    async fn overwrite(&self, handle: &DocumentHandle, text: &str) -> Result<(), StoreError>;
}

/// A `DocumentStore` over a directory tree on the local filesystem.
///
/// Documents are the files under `root` (recursively) whose extension equals
/// the configured filter. Enumeration follows directory read order per
/// directory; no global sorting is applied.
#[derive(Debug)]
pub struct FsDocumentStore {
    root: PathBuf,
    extension: String,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>, StoreError> {
        let mut handles = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if path.extension().and_then(|e| e.to_str()) == Some(self.extension.as_str())
                {
                    handles.push(DocumentHandle::new(path.to_string_lossy().into_owned()));
                }
            }
        }

        debug!(
            "Enumerated {} '.{}' document(s) under {}",
            handles.len(),
            self.extension,
            self.root.display()
        );
        Ok(handles)
    }

    async fn read(&self, handle: &DocumentHandle) -> Result<String, StoreError> {
        tokio::fs::read_to_string(handle.path())
            .await
            .map_err(|source| StoreError::Read {
                path: handle.path().to_string(),
                source,
            })
    }

    async fn create(&self, path: &str, text: &str) -> Result<(), StoreError> {
        // create_new refuses to touch an existing file, which is exactly the
        // collision behavior the backup step expects.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|source| StoreError::Create {
                path: path.to_string(),
                source,
            })?;
        file.write_all(text.as_bytes())
            .await
            .map_err(|source| StoreError::Create {
                path: path.to_string(),
                source,
            })?;
        file.flush().await.map_err(|source| StoreError::Create {
            path: path.to_string(),
            source,
        })
    }

    async fn overwrite(&self, handle: &DocumentHandle, text: &str) -> Result<(), StoreError> {
        tokio::fs::write(handle.path(), text)
            .await
            .map_err(|source| StoreError::Write {
                path: handle.path().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn lists_only_matching_extension() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("a.md"), "a")?;
        std::fs::write(dir.path().join("b.txt"), "b")?;
        std::fs::write(dir.path().join("a.md.bak"), "old backup")?;
        std::fs::create_dir(dir.path().join("nested"))?;
        std::fs::write(dir.path().join("nested/c.md"), "c")?;

        let store = FsDocumentStore::new(dir.path(), "md");
        let mut paths: Vec<String> = store
            .list_documents()
            .await?
            .into_iter()
            .map(|h| h.path().to_string())
            .collect();
        paths.sort();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.md"));
        assert!(paths[1].ends_with("c.md"));
        Ok(())
    }

    #[tokio::test]
    async fn create_refuses_existing_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("note.md.bak");
        std::fs::write(&path, "already here")?;

        let store = FsDocumentStore::new(dir.path(), "md");
        let result = store.create(path.to_str().unwrap(), "new content").await;

        assert!(matches!(result, Err(StoreError::Create { .. })));
        assert_eq!(std::fs::read_to_string(&path)?, "already here");
        Ok(())
    }

    #[tokio::test]
    async fn overwrite_replaces_content() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("note.md");
        std::fs::write(&path, "before")?;

        let store = FsDocumentStore::new(dir.path(), "md");
        let handle = DocumentHandle::new(path.to_str().unwrap());
        store.overwrite(&handle, "after").await?;

        assert_eq!(std::fs::read_to_string(&path)?, "after");
        Ok(())
    }
}
