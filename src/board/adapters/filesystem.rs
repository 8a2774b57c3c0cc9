//! Capability-scoped filesystem workspace.
//!
//! The adapter opens the workspace root once with ambient authority and
//! performs every later access relative to that directory handle, so document
//! names cannot escape the root through `..` or absolute paths.

use crate::board::ports::{Workspace, WorkspaceError, WorkspaceResult};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Workspace backed by a directory on the local filesystem.
#[derive(Debug)]
pub struct FilesystemWorkspace {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FilesystemWorkspace {
    /// Opens the workspace rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Open`] when the directory cannot be opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> WorkspaceResult<Self> {
        let root_path = root.as_ref().to_path_buf();
        let dir = Dir::open_ambient_dir(&root_path, ambient_authority()).map_err(|source| {
            WorkspaceError::Open {
                path: root_path.clone(),
                source,
            }
        })?;
        Ok(Self {
            root: root_path,
            dir,
        })
    }

    /// Returns the path the workspace was opened from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl Workspace for FilesystemWorkspace {
    fn top_level_directories(&self) -> WorkspaceResult<Vec<String>> {
        let mut names = Vec::new();
        for entry_result in self.dir.entries().map_err(WorkspaceError::Scan)? {
            let entry = entry_result.map_err(WorkspaceError::Scan)?;
            let Ok(name) = entry.file_name() else {
                tracing::debug!(root = %self.root, "skipping entry with a non UTF-8 name");
                continue;
            };
            if self.dir.is_dir(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_document(&self, name: &str) -> WorkspaceResult<Option<String>> {
        match self.dir.read_to_string(name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(WorkspaceError::Read {
                name: name.to_owned(),
                source,
            }),
        }
    }
}
