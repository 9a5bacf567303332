//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "grove API — Latest-Artifact Delivery",
        version = "0.3.2",
        description = "Serves the newest artifacts (image, recommendation document, 3D mesh) written by the external plant generation job, and forwards prompts to that job.",
        license(name = "MIT")
    ),
    paths(
        // Artifacts
        crate::routes::artifacts::latest_image,
        crate::routes::artifacts::latest_metadata,
        crate::routes::artifacts::latest_mesh,
        // Generate
        crate::routes::generate::submit_prompt,
    ),
    components(schemas(
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Generate DTOs
        crate::routes::generate::SubmitRequest,
        crate::routes::generate::SubmitResponse,
    )),
    tags(
        (name = "artifacts", description = "Latest-artifact resolution and delivery"),
        (name = "generate", description = "Prompt submission to the generation service"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
