//! Workspace port: the directory a collaboration run is pointed at.

use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

/// Result type for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Read-only view of the workspace a run is pointed at.
pub trait Workspace {
    /// Lists the names of the top-level directories.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Scan`] when the listing cannot be read.
    fn top_level_directories(&self) -> WorkspaceResult<Vec<String>>;

    /// Reads a document by its path relative to the workspace root.
    ///
    /// Returns `Ok(None)` when the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Read`] for every other I/O failure.
    fn read_document(&self, name: &str) -> WorkspaceResult<Option<String>>;
}

/// Errors returned by workspace implementations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The workspace root could not be opened.
    #[error("failed to open workspace root '{path}': {source}")]
    Open {
        /// Root path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Listing the top-level directories failed.
    #[error("failed to scan workspace directories: {0}")]
    Scan(#[source] io::Error),

    /// Reading a document failed for a reason other than absence.
    #[error("failed to read '{name}': {source}")]
    Read {
        /// Document path relative to the workspace root.
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl WorkspaceError {
    /// Returns the underlying I/O failure.
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } | Self::Scan(source) => source,
        }
    }
}
