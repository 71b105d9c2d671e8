//! The [`CourseStore`] trait defining the registry contract.
//!
//! The trait is synchronous: callers that share a store across threads are
//! responsible for serializing access to it (the server wraps it in a single
//! async mutex).

use crate::error::RegistryError;
use crate::types::{Course, CourseDraft, CourseId};

/// The storage contract for course records.
pub trait CourseStore {
    /// Returns every stored course in insertion order.
    fn list(&self) -> Vec<Course>;

    /// Stores a new course under a freshly generated ID and returns it.
    ///
    /// The new record is appended after every existing one.
    fn create(&mut self, draft: CourseDraft) -> Course;

    /// Returns the first course whose ID matches exactly.
    fn get(&self, id: &CourseId) -> Result<Course, RegistryError>;

    /// Replaces every field of the addressed course, keeping its ID and its
    /// position in the collection.
    ///
    /// Nothing is modified when the ID is unknown.
    fn update(&mut self, id: &CourseId, draft: CourseDraft) -> Result<Course, RegistryError>;

    /// Removes the addressed course and returns its last state.
    ///
    /// Nothing is modified when the ID is unknown.
    fn delete(&mut self, id: &CourseId) -> Result<Course, RegistryError>;
}
