//! API schema types for request validation and error details.

pub mod courses;
