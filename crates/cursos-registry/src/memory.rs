//! In-memory implementation of [`CourseStore`].
//!
//! [`InMemoryRegistry`] keeps courses in a `Vec` so insertion order is the
//! listing order. Lookups are a linear scan where the first exact match wins.

use crate::error::RegistryError;
use crate::traits::CourseStore;
use crate::types::{Course, CourseDraft, CourseId};

/// Volatile, process-scoped course collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    courses: Vec<Course>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        InMemoryRegistry {
            courses: Vec::new(),
        }
    }

    /// Number of stored courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn position(&self, id: &CourseId) -> Result<usize, RegistryError> {
        self.courses
            .iter()
            .position(|course| course.id == *id)
            .ok_or_else(|| {
                tracing::debug!(course_id = %id, "course not found");
                RegistryError::CourseNotFound(id.clone())
            })
    }
}

impl CourseStore for InMemoryRegistry {
    fn list(&self) -> Vec<Course> {
        self.courses.clone()
    }

    fn create(&mut self, draft: CourseDraft) -> Course {
        let course = Course::from_draft(CourseId::generate(), draft);
        self.courses.push(course.clone());
        tracing::info!(course_id = %course.id, total = self.courses.len(), "course created");
        course
    }

    fn get(&self, id: &CourseId) -> Result<Course, RegistryError> {
        let index = self.position(id)?;
        Ok(self.courses[index].clone())
    }

    fn update(&mut self, id: &CourseId, draft: CourseDraft) -> Result<Course, RegistryError> {
        let index = self.position(id)?;
        let course = Course::from_draft(id.clone(), draft);
        self.courses[index] = course.clone();
        tracing::info!(course_id = %id, "course replaced");
        Ok(course)
    }

    fn delete(&mut self, id: &CourseId) -> Result<Course, RegistryError> {
        let index = self.position(id)?;
        let removed = self.courses.remove(index);
        tracing::info!(course_id = %id, total = self.courses.len(), "course deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn draft(nombre: &str) -> CourseDraft {
        CourseDraft {
            nombre: nombre.to_string(),
            descripcion: Some(format!("about {}", nombre)),
            nivel: "beginner".to_string(),
            duracion: 10,
        }
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = InMemoryRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn create_assigns_distinct_ids_and_appends() {
        let mut registry = InMemoryRegistry::new();
        let created: Vec<Course> = (0..50)
            .map(|i| registry.create(draft(&format!("course {}", i))))
            .collect();

        let ids: HashSet<&str> = created.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
        assert!(created.iter().all(|c| !c.id.as_str().is_empty()));

        let listed = registry.list();
        assert_eq!(listed, created);
        assert_eq!(listed[0].nombre, "course 0");
        assert_eq!(listed[49].nombre, "course 49");
    }

    #[test]
    fn create_copies_every_draft_field() {
        let mut registry = InMemoryRegistry::new();
        let input = draft("Intro to Go");
        let course = registry.create(input.clone());
        assert_eq!(course.nombre, input.nombre);
        assert_eq!(course.descripcion, input.descripcion);
        assert_eq!(course.nivel, input.nivel);
        assert_eq!(course.duracion, input.duracion);
        assert_eq!(registry.get(&course.id).unwrap(), course);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let mut registry = InMemoryRegistry::new();
        registry.create(draft("a"));
        let missing = CourseId::from("does-not-exist");
        assert_eq!(
            registry.get(&missing),
            Err(RegistryError::CourseNotFound(missing.clone()))
        );
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut registry = InMemoryRegistry::new();
        let course = registry.create(draft("a"));
        let upper = CourseId::from(course.id.as_str().to_uppercase());
        let padded = CourseId::from(format!(" {}", course.id));
        assert!(registry.get(&upper).is_err());
        assert!(registry.get(&padded).is_err());
    }

    #[test]
    fn update_replaces_all_fields_in_place() {
        let mut registry = InMemoryRegistry::new();
        let first = registry.create(draft("first"));
        let second = registry.create(draft("second"));
        let third = registry.create(draft("third"));

        let replacement = CourseDraft {
            nombre: "second v2".to_string(),
            descripcion: None,
            nivel: "advanced".to_string(),
            duracion: 99,
        };
        let updated = registry.update(&second.id, replacement).unwrap();
        assert_eq!(updated.id, second.id);
        assert_eq!(updated.descripcion, None);
        assert_eq!(updated.nivel, "advanced");

        let listed = registry.list();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0], first);
        assert_eq!(listed[1], updated);
        assert_eq!(listed[2], third);
    }

    #[test]
    fn update_unknown_id_leaves_collection_untouched() {
        let mut registry = InMemoryRegistry::new();
        registry.create(draft("a"));
        let before = registry.list();
        let missing = CourseId::generate();
        assert!(matches!(
            registry.update(&missing, draft("b")),
            Err(RegistryError::CourseNotFound(_))
        ));
        assert_eq!(registry.list(), before);
    }

    #[test]
    fn delete_returns_last_state_then_not_found() {
        let mut registry = InMemoryRegistry::new();
        let keep = registry.create(draft("keep"));
        let course = registry.create(draft("drop"));
        let tail = registry.create(draft("tail"));

        let removed = registry.delete(&course.id).unwrap();
        assert_eq!(removed, course);
        assert_eq!(registry.list(), vec![keep, tail]);

        assert_eq!(
            registry.delete(&course.id),
            Err(RegistryError::CourseNotFound(course.id.clone()))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn deleted_ids_are_not_reissued() {
        let mut registry = InMemoryRegistry::new();
        let gone = registry.create(draft("gone"));
        registry.delete(&gone.id).unwrap();
        let fresh = registry.create(draft("fresh"));
        assert_ne!(fresh.id, gone.id);
    }
}
