//! Artifact storage abstraction and its filesystem implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::DirectoryEntry;
use crate::error::ArtifactError;
use crate::kind::ArtifactKind;

/// Abstraction over a directory of timestamped generator output.
///
/// The kind carries the directory name and suffix filter, so the store
/// only needs the artifact root. Implementations must apply the kind's
/// suffix filter during listing, before any selection happens.
pub trait ArtifactStore {
    /// List eligible entries for a kind with their modification times.
    ///
    /// An existing-but-empty directory yields an empty vec, never an
    /// error. A missing directory yields
    /// [`ArtifactError::DirectoryMissing`].
    fn list(&self, kind: ArtifactKind) -> Result<Vec<DirectoryEntry>, ArtifactError>;

    /// Read the full contents of one named entry.
    fn read_bytes(&self, kind: ArtifactKind, name: &str) -> Result<Vec<u8>, ArtifactError>;
}

/// Filesystem-backed store rooted at a configurable directory.
///
/// Each [`ArtifactKind`] maps to a fixed subdirectory of the root
/// (`img/`, `info/`, `obj/`). Cheap to clone — holds only the root path.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a kind's artifacts are written to.
    pub fn dir_for(&self, kind: ArtifactKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }
}

impl ArtifactStore for FsArtifactStore {
    fn list(&self, kind: ArtifactKind) -> Result<Vec<DirectoryEntry>, ArtifactError> {
        let dir = self.dir_for(kind);
        let read_dir = fs::read_dir(&dir).map_err(|e| map_dir_error(&dir, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| ArtifactError::Io {
                path: dir.clone(),
                source: e,
            })?;

            let name = match item.file_name().into_string() {
                Ok(name) => name,
                // Non-UTF-8 names cannot be echoed in headers or JSON;
                // the generator never produces them. Skip.
                Err(_) => continue,
            };

            if let Some(suffix) = kind.suffix_filter() {
                if !name.ends_with(suffix) {
                    continue;
                }
            }

            // Entries that vanish or lose readability between readdir
            // and stat are treated as not present in this listing.
            let metadata = match item.metadata() {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!(kind = %kind, name, error = %e, "skipping unstatable entry");
                    continue;
                }
            };
            if metadata.is_dir() {
                continue;
            }
            let modified_at = metadata.modified().map_err(|e| ArtifactError::Io {
                path: dir.join(&name),
                source: e,
            })?;

            entries.push(DirectoryEntry { name, modified_at });
        }

        tracing::debug!(kind = %kind, count = entries.len(), "listed artifact directory");
        Ok(entries)
    }

    fn read_bytes(&self, kind: ArtifactKind, name: &str) -> Result<Vec<u8>, ArtifactError> {
        let path = self.dir_for(kind).join(name);
        fs::read(&path).map_err(|e| match e.kind() {
            // The selected entry disappeared between listing and read —
            // the generator (or an operator) removed it mid-resolution.
            io::ErrorKind::NotFound => {
                ArtifactError::malformed(name, "entry vanished between selection and read")
            }
            _ => ArtifactError::Io { path, source: e },
        })
    }
}

fn map_dir_error(dir: &Path, e: io::Error) -> ArtifactError {
    match e.kind() {
        io::ErrorKind::NotFound => ArtifactError::DirectoryMissing {
            path: dir.to_path_buf(),
        },
        _ => ArtifactError::Io {
            path: dir.to_path_buf(),
            source: e,
        },
    }
}
