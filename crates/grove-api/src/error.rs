//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps `grove-artifact` and `grove-gen-client` errors to HTTP status
//! codes with JSON error bodies. Internal and upstream error details
//! are never exposed to clients; malformed-artifact details are, since
//! callers use them to decide whether to retry after a delay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses use this format for consistency across the API
/// surface.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "MALFORMED_ARTIFACT").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found — here, an artifact directory that does not
    /// exist (404). Note that an *empty* directory is not an error at
    /// all: those requests answer 204 and never construct an `AppError`.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body could not be parsed (422). Normalized with
    /// `Validation`: syntactically valid HTTP carrying semantically
    /// invalid content.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The newest artifact could not be read or decoded (502) — the
    /// external generator produced it, so from this service's view the
    /// upstream emitted bad output. Distinct code so callers can retry
    /// after a delay.
    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    /// The generation service rejected or could not be reached (502).
    /// Message is logged but not returned to the client.
    #[error("upstream generation service error: {0}")]
    UpstreamError(String),

    /// Service dependency not configured (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error (500). Message is logged but not returned
    /// to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::UNPROCESSABLE_ENTITY, "BAD_REQUEST"),
            Self::MalformedArtifact(_) => (StatusCode::BAD_GATEWAY, "MALFORMED_ARTIFACT"),
            Self::UpstreamError(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal/upstream error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            Self::UpstreamError(_) => "The generation service failed to accept the request".to_string(),
            other => other.to_string(),
        };

        // Log server-side errors for operator visibility.
        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::UpstreamError(_) => tracing::error!(error = %self, "generation service error"),
            Self::MalformedArtifact(_) => tracing::warn!(error = %self, "malformed artifact"),
            Self::ServiceUnavailable(_) => tracing::warn!(error = %self, "service unavailable"),
            _ => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert artifact resolution errors to API errors.
///
/// `DirectoryMissing` is a 404 per the delivery contract; I/O failures
/// are internal; malformed artifacts get their distinct 502 code.
impl From<grove_artifact::ArtifactError> for AppError {
    fn from(err: grove_artifact::ArtifactError) -> Self {
        match &err {
            grove_artifact::ArtifactError::DirectoryMissing { .. } => {
                Self::NotFound(err.to_string())
            }
            grove_artifact::ArtifactError::Io { .. } => Self::Internal(err.to_string()),
            grove_artifact::ArtifactError::Malformed { .. } => {
                Self::MalformedArtifact(err.to_string())
            }
        }
    }
}

/// Convert generation client errors to API errors.
impl From<grove_gen_client::GenApiError> for AppError {
    fn from(err: grove_gen_client::GenApiError) -> Self {
        match &err {
            grove_gen_client::GenApiError::Config(_) => Self::ServiceUnavailable(err.to_string()),
            _ => Self::UpstreamError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_code() {
        let err = AppError::NotFound("artifact directory missing: img".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn validation_status_code() {
        let err = AppError::Validation("prompt must not be empty".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn bad_request_status_code() {
        let err = AppError::BadRequest("malformed JSON".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[test]
    fn malformed_artifact_status_code() {
        let err = AppError::MalformedArtifact("broken.json: eof".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "MALFORMED_ARTIFACT");
    }

    #[test]
    fn upstream_error_status_code() {
        let err = AppError::UpstreamError("generation service timeout".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");
    }

    #[test]
    fn service_unavailable_status_code() {
        let err = AppError::ServiceUnavailable("generation client not configured".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn internal_status_code() {
        let err = AppError::Internal("disk on fire".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn directory_missing_converts_to_not_found() {
        let artifact_err = grove_artifact::ArtifactError::DirectoryMissing {
            path: "/data/img".into(),
        };
        let app_err = AppError::from(artifact_err);
        let (status, _) = app_err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_converts_to_bad_gateway_with_detail() {
        let artifact_err =
            grove_artifact::ArtifactError::malformed("broken.json", "unexpected eof");
        let app_err = AppError::from(artifact_err);
        match &app_err {
            AppError::MalformedArtifact(msg) => assert!(msg.contains("broken.json")),
            other => panic!("expected MalformedArtifact, got: {other:?}"),
        }
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    /// Helper to extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("img missing".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("img missing"));
    }

    #[tokio::test]
    async fn into_response_malformed_artifact_keeps_detail() {
        let (status, body) =
            response_parts(AppError::MalformedArtifact("broken.json: eof".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error.code, "MALFORMED_ARTIFACT");
        // Callers need the detail to decide on retry.
        assert!(body.error.message.contains("broken.json"));
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) = response_parts(AppError::Internal("disk i/o failed".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert!(
            !body.error.message.contains("disk i/o"),
            "internal error details must not leak: {}",
            body.error.message
        );
        assert_eq!(body.error.message, "An internal error occurred");
    }

    #[tokio::test]
    async fn into_response_upstream_hides_details() {
        let (status, body) =
            response_parts(AppError::UpstreamError("connect refused 10.0.0.3".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error.code, "UPSTREAM_ERROR");
        assert!(!body.error.message.contains("10.0.0.3"));
    }
}
