//! Artifact resolution error taxonomy.
//!
//! Three distinct failure classes, mapped to distinct HTTP outcomes by
//! the API layer. "Directory exists but is empty" is deliberately NOT
//! here — that is an expected state, represented as `Ok(None)` by
//! [`crate::resolve_latest`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors from listing, selecting, or reading artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact directory itself is absent. An environment or
    /// provisioning error, fatal to the request; never retried here.
    #[error("artifact directory missing: {path}")]
    DirectoryMissing {
        /// Absolute or root-relative path of the missing directory.
        path: PathBuf,
    },

    /// An I/O failure other than a missing directory.
    #[error("i/o error at {path}: {source}")]
    Io {
        /// Path being listed or read when the failure occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The newest entry could not be decoded, or was empty — the
    /// visible surface of a read racing the generator's in-progress
    /// write. Reportable so a caller can decide to retry after a delay.
    #[error("malformed artifact {name}: {reason}")]
    Malformed {
        /// Name of the offending entry.
        name: String,
        /// Why decoding failed (empty file, JSON syntax error, ...).
        reason: String,
    },
}

impl ArtifactError {
    /// Construct a [`ArtifactError::Malformed`] for an entry.
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_and_reason() {
        let err = ArtifactError::DirectoryMissing {
            path: PathBuf::from("/data/img"),
        };
        assert!(err.to_string().contains("/data/img"));

        let err = ArtifactError::malformed("out.json", "unexpected end of input");
        assert!(err.to_string().contains("out.json"));
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
