//! # Delivery Framing
//!
//! Maps a resolved artifact to a framed HTTP response. This layer only
//! attaches framing metadata (content type, attachment disposition);
//! payload content passes through untransformed.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use grove_artifact::{ArtifactKind, ArtifactPayload, ResolvedArtifact};

/// Newtype carrying a resolved artifact into Axum's response machinery.
///
/// Framing per kind:
/// - **Image** — raw bytes, `Content-Type: image/jpeg` (fixed; not
///   derived from the file signature).
/// - **Metadata** — parsed document re-serialized as JSON.
/// - **Mesh** — raw bytes, `Content-Type: application/octet-stream`,
///   plus an attachment disposition carrying the resolved entry name so
///   the extension chosen by the generator survives the download.
#[derive(Debug)]
pub struct ArtifactResponse(pub ResolvedArtifact);

impl IntoResponse for ArtifactResponse {
    fn into_response(self) -> Response {
        let ResolvedArtifact {
            kind,
            name,
            payload,
        } = self.0;

        let bytes = match payload {
            ArtifactPayload::Json(value) => return Json(value).into_response(),
            ArtifactPayload::Bytes(bytes) => bytes,
        };

        let mut response =
            ([(header::CONTENT_TYPE, kind.content_type())], bytes).into_response();

        if kind == ArtifactKind::Mesh {
            let disposition = format!("attachment; filename=\"{name}\"");
            match HeaderValue::from_str(&disposition) {
                Ok(value) => {
                    response
                        .headers_mut()
                        .insert(header::CONTENT_DISPOSITION, value);
                }
                Err(_) => {
                    // Entry names with header-invalid characters cannot
                    // be echoed; refuse to serve a half-framed mesh.
                    tracing::warn!(name, "mesh entry name not representable in a header");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            }
        }

        response
    }
}
