//! # Request Extraction & Validation
//!
//! JSON body extraction for the submission surface. Deserialization
//! failures and business-rule violations both normalize to 422 via
//! [`AppError`], so clients see one taxonomy for "your request was
//! syntactically or semantically unusable".

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Business-rule validation for request DTOs, run after serde has
/// accepted the shape.
///
/// ```ignore
/// impl Validate for SubmitRequest {
///     fn validate(&self) -> Result<(), String> {
///         if self.prompt.trim().is_empty() {
///             return Err("prompt must not be empty".to_string());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap an axum JSON extraction, mapping rejections (malformed JSON,
/// wrong content type) to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body, then run its [`Validate`] rules.
///
/// Handlers take `Result<Json<T>, JsonRejection>` and call this first,
/// so a request never reaches handler logic without passing both
/// deserialization and validation.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}
