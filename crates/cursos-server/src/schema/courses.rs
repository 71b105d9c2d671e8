//! Course request validation.
//!
//! [`CoursePayload`] is the boundary extractor for `POST /cursos/` and
//! `PUT /cursos/{curso_id}`. It reads the body as untyped JSON (a missing
//! `Content-Type` is treated as JSON, any other non-JSON type is rejected)
//! and checks every field before anything reaches the registry, so a single
//! 422 response lists every violation rather than only the first one.
//!
//! Field rules:
//! - `nombre`, `nivel`: required strings. `null` counts as missing.
//! - `duracion`: required integer. JSON integers, floats with no fractional
//!   part, and strings holding a base-10 integer are accepted. Booleans and
//!   decimal strings such as `"12.0"` are not.
//! - `descripcion`: optional string, `null` and absent both mean "none".
//! - `id`: optional string, its value is always discarded.
//! - Unknown keys are ignored.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use serde::Serialize;
use serde_json::{Map, Value};

use cursos_registry::CourseDraft;

use crate::error::ApiError;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Location of the offending value, e.g. `["body", "duracion"]`.
    pub loc: Vec<String>,
    /// Machine-readable code ("MISSING", "STRING_TYPE", "INT_TYPE", ...).
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl FieldViolation {
    fn new(loc: &[&str], code: &str, message: impl Into<String>) -> Self {
        FieldViolation {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn missing(field: &str) -> Self {
        Self::new(&["body", field], "MISSING", "Field required")
    }

    fn string_type(field: &str) -> Self {
        Self::new(&["body", field], "STRING_TYPE", "Input should be a valid string")
    }

    fn int_type(field: &str) -> Self {
        Self::new(
            &["body", field],
            "INT_TYPE",
            "Input should be a valid integer",
        )
    }
}

/// Validated course body, ready to hand to the registry.
#[derive(Debug, Clone)]
pub struct CoursePayload(pub CourseDraft);

impl<S> FromRequest<S> for CoursePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            if !is_json_content_type(content_type.to_str().unwrap_or_default()) {
                return Err(ApiError::ValidationFailed(vec![FieldViolation::new(
                    &["body"],
                    "JSON_INVALID",
                    "Expected request with `Content-Type: application/json`",
                )]));
            }
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::ValidationFailed(vec![FieldViolation::new(
                &["body"],
                "JSON_INVALID",
                rejection.body_text(),
            )])
        })?;
        if bytes.is_empty() {
            return Err(ApiError::ValidationFailed(vec![FieldViolation::new(
                &["body"],
                "MISSING",
                "Field required",
            )]));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
            ApiError::ValidationFailed(vec![FieldViolation::new(
                &["body"],
                "JSON_INVALID",
                format!("JSON decode error: {}", err),
            )])
        })?;

        validate_course(&value)
            .map(CoursePayload)
            .map_err(ApiError::ValidationFailed)
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn is_json_content_type(raw: &str) -> bool {
    let essence = raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Checks a JSON body against the course shape.
///
/// Returns every violation found; the draft is only built when there are none.
pub fn validate_course(value: &Value) -> Result<CourseDraft, Vec<FieldViolation>> {
    let Some(object) = value.as_object() else {
        return Err(vec![FieldViolation::new(
            &["body"],
            "OBJECT_TYPE",
            "Input should be a valid JSON object",
        )]);
    };

    let mut violations = Vec::new();

    if let Err(v) = optional_string(object, "id") {
        violations.push(v);
    }
    let nombre = required_string(object, "nombre").map_err(|v| violations.push(v)).ok();
    let descripcion = optional_string(object, "descripcion")
        .map_err(|v| violations.push(v))
        .ok();
    let nivel = required_string(object, "nivel").map_err(|v| violations.push(v)).ok();
    let duracion = required_int(object, "duracion").map_err(|v| violations.push(v)).ok();

    match (nombre, descripcion, nivel, duracion) {
        (Some(nombre), Some(descripcion), Some(nivel), Some(duracion)) if violations.is_empty() => {
            Ok(CourseDraft {
                nombre,
                descripcion,
                nivel,
                duracion,
            })
        }
        _ => Err(violations),
    }
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|v| !v.is_null())
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, FieldViolation> {
    match present(object, field) {
        None => Err(FieldViolation::missing(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldViolation::string_type(field)),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, FieldViolation> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FieldViolation::string_type(field)),
    }
}

fn required_int(object: &Map<String, Value>, field: &str) -> Result<i64, FieldViolation> {
    let value = present(object, field).ok_or_else(|| FieldViolation::missing(field))?;
    coerce_int(value).ok_or_else(|| FieldViolation::int_type(field))
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
