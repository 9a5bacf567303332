//! # Artifact Delivery Routes
//!
//! One endpoint per artifact kind, each independently composing the
//! resolution engine (list → select → read) over its own directory and
//! framing the result for delivery. A failure resolving one kind never
//! affects the other two.
//!
//! ## Endpoints
//!
//! - `GET /v1/artifacts/image` — newest rendered image (image/jpeg)
//! - `GET /v1/artifacts/metadata` — newest recommendation document (JSON)
//! - `GET /v1/artifacts/mesh` — newest `.obj` mesh (attachment)
//!
//! ## Outcomes
//!
//! 200 framed artifact · 204 directory empty ("nothing produced yet") ·
//! 404 directory absent · 502 newest entry malformed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use grove_artifact::{resolve_latest, ArtifactKind};

use crate::delivery::ArtifactResponse;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Build the artifacts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/artifacts/image", get(latest_image))
        .route("/v1/artifacts/metadata", get(latest_metadata))
        .route("/v1/artifacts/mesh", get(latest_mesh))
}

/// Resolve the newest artifact of `kind` and frame it.
///
/// The listing/read runs on the blocking pool — it is filesystem I/O,
/// and each request re-derives the listing from scratch (no cache, no
/// shared state, no locks).
async fn resolve_and_frame(state: AppState, kind: ArtifactKind) -> Result<Response, AppError> {
    let store = state.store.clone();
    let resolved = tokio::task::spawn_blocking(move || resolve_latest(&store, kind))
        .await
        .map_err(|e| AppError::Internal(format!("artifact resolution task failed: {e}")))??;

    Ok(match resolved {
        Some(artifact) => ArtifactResponse(artifact).into_response(),
        // Expected empty state — no content, not an error.
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /v1/artifacts/image — Serve the newest generated image.
#[utoipa::path(
    get,
    path = "/v1/artifacts/image",
    responses(
        (status = 200, description = "Newest image, content-type image/jpeg"),
        (status = 204, description = "No image produced yet"),
        (status = 404, description = "Image directory absent", body = ErrorBody),
        (status = 502, description = "Newest image unreadable", body = ErrorBody),
    ),
    tag = "artifacts"
)]
async fn latest_image(State(state): State<AppState>) -> Result<Response, AppError> {
    resolve_and_frame(state, ArtifactKind::Image).await
}

/// GET /v1/artifacts/metadata — Serve the newest recommendation document.
#[utoipa::path(
    get,
    path = "/v1/artifacts/metadata",
    responses(
        (status = 200, description = "Newest document, parsed and re-serialized as JSON"),
        (status = 204, description = "No document produced yet"),
        (status = 404, description = "Metadata directory absent", body = ErrorBody),
        (status = 502, description = "Newest document failed to parse", body = ErrorBody),
    ),
    tag = "artifacts"
)]
async fn latest_metadata(State(state): State<AppState>) -> Result<Response, AppError> {
    resolve_and_frame(state, ArtifactKind::Metadata).await
}

/// GET /v1/artifacts/mesh — Serve the newest `.obj` mesh as an attachment.
#[utoipa::path(
    get,
    path = "/v1/artifacts/mesh",
    responses(
        (status = 200, description = "Newest mesh, attachment disposition with original filename"),
        (status = 204, description = "No mesh produced yet"),
        (status = 404, description = "Mesh directory absent", body = ErrorBody),
        (status = 502, description = "Newest mesh unreadable", body = ErrorBody),
    ),
    tag = "artifacts"
)]
async fn latest_mesh(State(state): State<AppState>) -> Result<Response, AppError> {
    resolve_and_frame(state, ArtifactKind::Mesh).await
}
