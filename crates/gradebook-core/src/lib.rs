//! gradebook-core — Student registry, deduplication, and grade summaries.
//!
//! This crate holds the in-memory registry of students and their completed
//! courses, the per-student report, the aggregate summary, and the roster
//! and configuration loaders the CLI builds on.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod report;
pub mod statistics;

pub use error::RegistryError;
pub use model::{Enrollment, StudentRecord};
pub use registry::{CourseOutcome, Registry};
