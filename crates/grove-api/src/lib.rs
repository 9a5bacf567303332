//! # grove-api — Axum API Services for the grove Stack
//!
//! HTTP delivery layer over `grove-artifact` (latest-artifact
//! resolution) and `grove-gen-client` (prompt forwarding). An external
//! generation job writes artifacts into shared directories; each
//! request here re-derives "newest" from the filesystem and serves it
//! with correct framing.
//!
//! ## API Surface
//!
//! | Prefix                   | Module                 | Domain                  |
//! |--------------------------|------------------------|-------------------------|
//! | `/v1/artifacts/image`    | [`routes::artifacts`]  | Newest image            |
//! | `/v1/artifacts/metadata` | [`routes::artifacts`]  | Newest JSON document    |
//! | `/v1/artifacts/mesh`     | [`routes::artifacts`]  | Newest `.obj` mesh      |
//! | `/v1/generate`           | [`routes::generate`]   | Prompt submission       |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```
//!
//! ## Crate Policy
//!
//! - No resolution logic in route handlers — delegates to `grove-artifact`.
//! - All errors map to structured HTTP responses via `AppError`.
//! - No shared mutable state between requests; the filesystem is the
//!   source of truth.

pub mod delivery;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the metrics
/// middleware so probe traffic does not skew request counters.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::artifacts::router())
        .merge(routes::generate::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state.clone());

    // Unauthenticated health probes.
    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the application is ready to serve traffic.
///
/// Checks that every artifact directory exists under the configured
/// root. A missing directory means the environment is not provisioned
/// (directory layout provisioning is the deployer's job, not ours) and
/// artifact requests would 404.
///
/// Returns 200 "ready" or 503 with a diagnostic message.
///
/// The directory stats run on the blocking pool, same as the artifact
/// routes' filesystem work.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.clone();
    let missing = tokio::task::spawn_blocking(move || {
        grove_artifact::ArtifactKind::ALL
            .into_iter()
            .map(|kind| store.dir_for(kind))
            .find(|dir| !dir.is_dir())
    })
    .await;

    match missing {
        Ok(None) => (StatusCode::OK, "ready").into_response(),
        Ok(Some(dir)) => {
            tracing::warn!(dir = %dir.display(), "artifact directory not provisioned");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("artifact directory missing: {}", dir.display()),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("readiness check failed: {e}"),
        )
            .into_response(),
    }
}
