//! Registry error types.

use thiserror::Error;

use crate::types::CourseId;

/// Errors produced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No course with the given ID is currently stored.
    #[error("course not found: {0}")]
    CourseNotFound(CourseId),
}
