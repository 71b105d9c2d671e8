//! HTTP/JSON API server for the course registry.
//!
//! Exposes the `/cursos/` collection with list, create, get, update and
//! delete endpoints. This crate contains the boundary layer only: request
//! validation, route definitions, error-to-status mapping and startup
//! configuration. Course semantics live in `cursos-registry`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
