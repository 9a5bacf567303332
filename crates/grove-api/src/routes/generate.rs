//! # Prompt Submission Route
//!
//! Forwards a prompt to the external generation service and reports
//! the forwarding outcome only — the generation job is asynchronous
//! and out of process, so this endpoint carries no artifact data.
//! Callers poll the three artifact endpoints afterwards.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to start a generation job.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// Free-text prompt, e.g. "I want to plant an orange tree."
    pub prompt: String,
}

impl Validate for SubmitRequest {
    fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        Ok(())
    }
}

/// Acknowledgement that the prompt was forwarded.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// Always "accepted" — the job itself completes asynchronously.
    pub status: String,
    /// When the forwarding completed, for client polling heuristics.
    pub submitted_at: DateTime<Utc>,
    /// The generation service's acknowledgement body, passed through
    /// opaquely (its schema belongs to the service).
    #[schema(value_type = Object)]
    pub upstream: serde_json::Value,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the generate router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/generate", post(submit_prompt))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/generate — Forward a prompt to the generation service.
#[utoipa::path(
    post,
    path = "/v1/generate",
    request_body = SubmitRequest,
    responses(
        (status = 202, description = "Prompt forwarded; poll the artifact endpoints", body = SubmitResponse),
        (status = 422, description = "Empty or unparseable prompt", body = ErrorBody),
        (status = 502, description = "Generation service rejected or unreachable", body = ErrorBody),
        (status = 503, description = "Generation client not configured", body = ErrorBody),
    ),
    tag = "generate"
)]
async fn submit_prompt(
    State(state): State<AppState>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let req = extract_validated_json(body)?;

    let client = state.gen_client.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable(
            "generation service client not configured (set GROVE_GEN_URL)".to_string(),
        )
    })?;

    // No retry here: forwarding failure is the caller's signal.
    let upstream = client.submit(&req.prompt).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitResponse {
            status: "accepted".to_string(),
            submitted_at: Utc::now(),
            upstream,
        }),
    ))
}
