//! Artifact kind enumeration and per-kind delivery attributes.
//!
//! Each kind the generation job produces maps to a directory name, an
//! optional filename-suffix filter, a content type, and a flag for
//! whether the payload must parse as structured JSON. The directory
//! names (`img`, `info`, `obj`) are the generator's fixed on-disk
//! layout, not configurable per deployment.

use serde::{Deserialize, Serialize};

/// One of the three artifact families the generation job produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Rendered plant image.
    Image,
    /// JSON recommendation document.
    Metadata,
    /// 3D mesh exported by the generator.
    Mesh,
}

impl ArtifactKind {
    /// All kinds, in a fixed order. Useful for readiness checks.
    pub const ALL: [ArtifactKind; 3] = [Self::Image, Self::Metadata, Self::Mesh];

    /// Directory name under the artifact root this kind is written to.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Metadata => "info",
            Self::Mesh => "obj",
        }
    }

    /// Case-sensitive filename suffix restricting which entries are
    /// eligible for selection.
    ///
    /// Only the mesh directory needs one: the generator writes auxiliary
    /// files (`.mtl` materials, textures) next to the `.obj` mesh, and
    /// those must never win selection regardless of their mtimes.
    pub fn suffix_filter(&self) -> Option<&'static str> {
        match self {
            Self::Image | Self::Metadata => None,
            Self::Mesh => Some(".obj"),
        }
    }

    /// Content type the artifact is delivered with.
    ///
    /// `image/jpeg` is a fixed assumption carried over from the original
    /// delivery layer — it is never verified against the file bytes, so
    /// a generator emitting PNG would be mislabeled. Known limitation.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Image => "image/jpeg",
            Self::Metadata => "application/json",
            Self::Mesh => "application/octet-stream",
        }
    }

    /// Whether payload bytes must decode as a JSON document.
    ///
    /// The document's shape is deliberately unconstrained: the
    /// generator's schema defines its fields and this crate treats the
    /// decoded value as opaque.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Metadata)
    }

    /// String name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Metadata => "metadata",
            Self::Mesh => "mesh",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mesh_has_a_suffix_filter() {
        assert_eq!(ArtifactKind::Image.suffix_filter(), None);
        assert_eq!(ArtifactKind::Metadata.suffix_filter(), None);
        assert_eq!(ArtifactKind::Mesh.suffix_filter(), Some(".obj"));
    }

    #[test]
    fn only_metadata_is_structured() {
        assert!(!ArtifactKind::Image.is_structured());
        assert!(ArtifactKind::Metadata.is_structured());
        assert!(!ArtifactKind::Mesh.is_structured());
    }

    #[test]
    fn directory_names_match_generator_layout() {
        assert_eq!(ArtifactKind::Image.dir_name(), "img");
        assert_eq!(ArtifactKind::Metadata.dir_name(), "info");
        assert_eq!(ArtifactKind::Mesh.dir_name(), "obj");
    }

    #[test]
    fn content_types() {
        assert_eq!(ArtifactKind::Image.content_type(), "image/jpeg");
        assert_eq!(ArtifactKind::Metadata.content_type(), "application/json");
        assert_eq!(
            ArtifactKind::Mesh.content_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ArtifactKind::Metadata).unwrap();
        assert_eq!(json, "\"metadata\"");
        let back: ArtifactKind = serde_json::from_str("\"mesh\"").unwrap();
        assert_eq!(back, ArtifactKind::Mesh);
    }
}
