//! Router assembly for the course HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// The collection lives at `/cursos/`; the slash-less `/cursos` answers with
/// a redirect to it. Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/cursos/",
            get(handlers::courses::list_courses).post(handlers::courses::create_course),
        )
        .route(
            "/cursos/{curso_id}",
            get(handlers::courses::get_course)
                .put(handlers::courses::update_course)
                .delete(handlers::courses::delete_course),
        )
        .route("/cursos", any(handlers::courses::redirect_to_collection))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
