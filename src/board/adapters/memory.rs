//! In-memory workspace for tests and demos.

use crate::board::ports::{Workspace, WorkspaceError, WorkspaceResult};
use std::collections::HashMap;
use std::io;

/// Workspace whose directories and documents live in memory.
///
/// Failures can be scripted per document, and for the directory scan, by
/// supplying the [`io::ErrorKind`] to report.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspace {
    directories: Vec<String>,
    documents: HashMap<String, String>,
    unreadable: HashMap<String, io::ErrorKind>,
    scan_failure: Option<io::ErrorKind>,
}

impl InMemoryWorkspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level directory.
    #[must_use]
    pub fn with_directory(mut self, name: impl Into<String>) -> Self {
        self.directories.push(name.into());
        self
    }

    /// Adds a document with the given contents.
    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.documents.insert(name.into(), contents.into());
        self
    }

    /// Makes reads of `name` fail with `kind`.
    #[must_use]
    pub fn with_unreadable_document(mut self, name: impl Into<String>, kind: io::ErrorKind) -> Self {
        self.unreadable.insert(name.into(), kind);
        self
    }

    /// Makes the directory scan fail with `kind`.
    #[must_use]
    pub const fn with_scan_failure(mut self, kind: io::ErrorKind) -> Self {
        self.scan_failure = Some(kind);
        self
    }
}

impl Workspace for InMemoryWorkspace {
    fn top_level_directories(&self) -> WorkspaceResult<Vec<String>> {
        if let Some(kind) = self.scan_failure {
            return Err(WorkspaceError::Scan(io::Error::from(kind)));
        }
        Ok(self.directories.clone())
    }

    fn read_document(&self, name: &str) -> WorkspaceResult<Option<String>> {
        if let Some(kind) = self.unreadable.get(name) {
            return Err(WorkspaceError::Read {
                name: name.to_owned(),
                source: io::Error::from(*kind),
            });
        }
        Ok(self.documents.get(name).cloned())
    }
}
