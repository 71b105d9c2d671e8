//! Course handlers (list, create, get, update, delete).

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;

use cursos_registry::{Course, CourseId, CourseStore};

use crate::error::ApiError;
use crate::schema::courses::CoursePayload;
use crate::state::AppState;

/// Lists all courses in insertion order.
///
/// `GET /cursos/`
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let registry = state.registry.lock().await;
    Json(registry.list())
}

/// Creates a course under a server-assigned ID.
///
/// `POST /cursos/`
pub async fn create_course(
    State(state): State<AppState>,
    CoursePayload(draft): CoursePayload,
) -> Json<Course> {
    let mut registry = state.registry.lock().await;
    Json(registry.create(draft))
}

/// Fetches a single course.
///
/// `GET /cursos/{curso_id}`
pub async fn get_course(
    State(state): State<AppState>,
    Path(curso_id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let registry = state.registry.lock().await;
    let course = registry.get(&CourseId(curso_id))?;
    Ok(Json(course))
}

/// Replaces every field of a course except its ID.
///
/// `PUT /cursos/{curso_id}`
pub async fn update_course(
    State(state): State<AppState>,
    Path(curso_id): Path<String>,
    CoursePayload(draft): CoursePayload,
) -> Result<Json<Course>, ApiError> {
    let mut registry = state.registry.lock().await;
    let course = registry.update(&CourseId(curso_id), draft)?;
    Ok(Json(course))
}

/// Removes a course and returns its last state.
///
/// `DELETE /cursos/{curso_id}`
pub async fn delete_course(
    State(state): State<AppState>,
    Path(curso_id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let mut registry = state.registry.lock().await;
    let course = registry.delete(&CourseId(curso_id))?;
    Ok(Json(course))
}

/// `/cursos` (any method) -> 307 to `/cursos/`, so clients retry with the
/// same method and body.
pub async fn redirect_to_collection() -> Redirect {
    Redirect::temporary("/cursos/")
}
