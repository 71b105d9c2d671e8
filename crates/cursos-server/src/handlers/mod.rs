//! HTTP handler modules for the course API.
//!
//! Handlers parse requests, acquire the registry lock, delegate to the
//! [`CourseStore`](cursos_registry::CourseStore) operations, and return JSON
//! responses. No course logic lives in handlers.

pub mod courses;
