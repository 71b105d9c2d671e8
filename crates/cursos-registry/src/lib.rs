//! In-memory course registry.
//!
//! Holds the ordered collection of [`Course`] records and the five operations
//! over it. The crate knows nothing about HTTP: payloads arrive here already
//! validated as [`CourseDraft`]s, and failures are reported as
//! [`RegistryError`] values for the boundary layer to translate.
//!
//! # Modules
//!
//! - [`error`]: RegistryError enum
//! - [`types`]: CourseId, CourseDraft, Course
//! - [`traits`]: CourseStore trait definition
//! - [`memory`]: InMemoryRegistry implementation

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::RegistryError;
pub use memory::InMemoryRegistry;
pub use traits::CourseStore;
pub use types::{Course, CourseDraft, CourseId};
