//! Registry error types.
//!
//! Lookups that the per-student report tolerates are fatal for mutations, so
//! `add_course` reports them as a typed error and lets the caller decide
//! whether to register the student or give up.

use thiserror::Error;

/// Errors that can occur when mutating the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A course was added for a name that was never registered.
    #[error("student not found: {0}")]
    StudentNotFound(String),
}
