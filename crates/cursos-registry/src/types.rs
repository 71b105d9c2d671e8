//! Course identity and record types.
//!
//! [`CourseId`] is assigned by the registry, never by clients. A
//! [`CourseDraft`] is a validated payload that has no identity yet; attaching
//! one with [`Course::from_draft`] produces the stored [`Course`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored course.
///
/// Rendered as a hyphenated lowercase UUID v4 string. Lookups compare the
/// inner string byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

impl CourseId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        CourseId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        CourseId(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId(value.to_string())
    }
}

/// A validated course payload without an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    /// Course name.
    pub nombre: String,
    /// Optional free-text description.
    pub descripcion: Option<String>,
    /// Free-form level label (e.g. "beginner").
    pub nivel: String,
    /// Duration, unit left to the client.
    pub duracion: i64,
}

/// A stored course record.
///
/// Serializes with every key present, `descripcion` as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub nivel: String,
    pub duracion: i64,
}

impl Course {
    /// Builds a record from a draft, taking every field from the draft.
    pub fn from_draft(id: CourseId, draft: CourseDraft) -> Self {
        let CourseDraft {
            nombre,
            descripcion,
            nivel,
            duracion,
        } = draft;
        Course {
            id,
            nombre,
            descripcion,
            nivel,
            duracion,
        }
    }
}
