//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.
//!
//! Error bodies carry a top-level `detail` (the message for 404/500, the
//! field violation list for 422) next to the `error` object, so clients that
//! only read `detail` keep working.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cursos_registry::RegistryError;

use crate::schema::courses::FieldViolation;

/// Message returned for every id-addressed lookup that misses.
pub const COURSE_NOT_FOUND: &str = "Curso no encontrado";

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_FAILED").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details (e.g., field violations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body failed field validation (422).
    #[error("validation failed")]
    ValidationFailed(Vec<FieldViolation>),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Top-level `detail` value of the error body: the message string, or the
    /// violation list for validation failures.
    fn detail_value(&self) -> serde_json::Value {
        match self {
            ApiError::NotFound(msg) | ApiError::InternalError(msg) => {
                serde_json::Value::String(msg.clone())
            }
            ApiError::ValidationFailed(violations) => {
                serde_json::to_value(violations).unwrap_or(serde_json::Value::Null)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ApiErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: msg.clone(),
                    details: None,
                },
            ),
            ApiError::ValidationFailed(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorDetail {
                    code: "VALIDATION_FAILED".to_string(),
                    message: format!("{} validation error(s)", violations.len()),
                    details: serde_json::to_value(violations).ok(),
                },
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    details: None,
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "detail": self.detail_value(),
            "error": error,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::CourseNotFound(_) => ApiError::NotFound(COURSE_NOT_FOUND.to_string()),
        }
    }
}
