//! Directory entries and the latest-entry selector.

use std::time::SystemTime;

/// One file observed in an artifact directory.
///
/// Ephemeral: re-derived from the filesystem on every resolution and
/// never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name within the artifact directory (no path components).
    pub name: String,
    /// Modification time reported by the filesystem.
    pub modified_at: SystemTime,
}

/// Select the newest entry by modification time.
///
/// A pure fold: keeps the entry with strictly greatest `modified_at`;
/// on exact timestamp ties the entry encountered first in enumeration
/// order wins, so the result is stable and does not depend on names.
/// Returns `None` for an empty slice — the "no artifact produced yet"
/// state, which callers must treat as expected rather than as failure.
pub fn select_latest(entries: &[DirectoryEntry]) -> Option<&DirectoryEntry> {
    // `reduce` keeps the accumulator on ties and returns the sole
    // element of a single-entry list without any comparison.
    entries
        .iter()
        .reduce(|latest, entry| {
            if entry.modified_at > latest.modified_at {
                entry
            } else {
                latest
            }
        })
}
