//! Artifact reading and the list → select → read resolution engine.

use crate::entry::{select_latest, DirectoryEntry};
use crate::error::ArtifactError;
use crate::kind::ArtifactKind;
use crate::store::ArtifactStore;

/// Payload of a resolved artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactPayload {
    /// Raw file contents (image, mesh).
    Bytes(Vec<u8>),
    /// Parsed JSON document (metadata). The shape is the generator's
    /// schema and is treated as opaque here.
    Json(serde_json::Value),
}

/// The newest artifact of one kind, ready for delivery.
///
/// Produced per request, consumed once, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtifact {
    /// Which artifact family this is.
    pub kind: ArtifactKind,
    /// The entry name, echoed back in the mesh attachment disposition
    /// so the extension chosen by the generator is preserved.
    pub name: String,
    /// Raw or parsed payload, per [`ArtifactKind::is_structured`].
    pub payload: ArtifactPayload,
}

/// Read one selected entry in full and decode it per its kind.
///
/// Whole-file reads only — artifacts are small relative to memory, so
/// there is no streaming. An empty file is the one partial-write state
/// this layer can recognize; it and JSON decode failures surface as
/// [`ArtifactError::Malformed`]. There is no integrity check beyond
/// "decoding succeeded".
pub fn read_artifact<S: ArtifactStore>(
    store: &S,
    kind: ArtifactKind,
    entry: &DirectoryEntry,
) -> Result<ResolvedArtifact, ArtifactError> {
    let bytes = store.read_bytes(kind, &entry.name)?;

    if bytes.is_empty() {
        return Err(ArtifactError::malformed(
            &entry.name,
            "empty file (generator write may be in progress)",
        ));
    }

    let payload = if kind.is_structured() {
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ArtifactError::malformed(&entry.name, e.to_string()))?;
        ArtifactPayload::Json(value)
    } else {
        ArtifactPayload::Bytes(bytes)
    };

    Ok(ResolvedArtifact {
        kind,
        name: entry.name.clone(),
        payload,
    })
}

/// Resolve the newest artifact of a kind: list → select → read.
///
/// The shared engine behind all three delivery endpoints. `Ok(None)`
/// means the directory exists but holds no eligible entries — the
/// expected "nothing produced yet" state, distinct from every error.
pub fn resolve_latest<S: ArtifactStore>(
    store: &S,
    kind: ArtifactKind,
) -> Result<Option<ResolvedArtifact>, ArtifactError> {
    let entries = store.list(kind)?;
    match select_latest(&entries) {
        None => Ok(None),
        Some(entry) => {
            tracing::debug!(kind = %kind, name = %entry.name, "resolved latest artifact");
            read_artifact(store, kind, entry).map(Some)
        }
    }
}
