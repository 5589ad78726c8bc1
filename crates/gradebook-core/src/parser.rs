//! TOML roster parser.
//!
//! A roster lists the students to register and the enrollments to record,
//! in the order they should be applied. Loading a roster replays those calls
//! against a fresh registry.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::model::Enrollment;
use crate::registry::{CourseOutcome, Registry};

/// A parsed roster file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Names to register, in order.
    #[serde(default)]
    pub students: Vec<String>,
    /// Enrollments to record, in order.
    #[serde(default)]
    pub enrollments: Vec<RosterEnrollment>,
}

/// One `[[enrollments]]` row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterEnrollment {
    pub student: String,
    pub course: String,
    pub grade: u32,
}

impl RosterEnrollment {
    pub fn enrollment(&self) -> Enrollment {
        Enrollment::new(self.course.clone(), self.grade)
    }
}

impl Roster {
    /// Replay the roster into a new registry.
    ///
    /// With `auto_register`, enrollments for unknown students register them
    /// first; otherwise the first such enrollment is an error.
    pub fn build_registry(&self, auto_register: bool) -> Result<Registry, RegistryError> {
        let mut registry = Registry::new();
        for name in &self.students {
            registry.add_student(name.clone());
        }

        for row in &self.enrollments {
            let outcome = match registry.add_course(&row.student, row.enrollment()) {
                Err(RegistryError::StudentNotFound(name)) if auto_register => {
                    tracing::warn!("registering {name} for enrollment in {}", row.course);
                    registry.add_student(name.clone());
                    registry.add_course(&name, row.enrollment())?
                }
                other => other?,
            };
            if outcome == CourseOutcome::IgnoredZeroGrade {
                tracing::warn!(
                    "ignoring zero grade for {} in {}",
                    row.student,
                    row.course
                );
            }
        }

        tracing::info!(
            "loaded {} student(s), {} enrollment row(s)",
            registry.len(),
            self.enrollments.len()
        );
        Ok(registry)
    }
}

/// Parse a roster file.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a roster from a TOML string (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))
}

/// Parse a roster file and build its registry in one step.
pub fn load_registry(path: &Path, auto_register: bool) -> Result<Registry> {
    let roster = parse_roster(path)?;
    roster
        .build_registry(auto_register)
        .with_context(|| format!("failed to apply roster: {}", path.display()))
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct RosterWarning {
    /// The student the warning refers to (if applicable).
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a roster for rows that will not do what they look like.
pub fn validate_roster(roster: &Roster) -> Vec<RosterWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for name in &roster.students {
        if name.trim().is_empty() {
            warnings.push(RosterWarning {
                student: None,
                message: "empty student name".into(),
            });
        }
        if !seen.insert(name.as_str()) {
            warnings.push(RosterWarning {
                student: Some(name.clone()),
                message: format!("duplicate student: {name} (record is reset)"),
            });
        }
    }

    let mut seen_rows = HashSet::new();
    for row in &roster.enrollments {
        if !seen.contains(row.student.as_str()) {
            warnings.push(RosterWarning {
                student: Some(row.student.clone()),
                message: format!("enrollment in {} for unregistered student", row.course),
            });
        }
        if row.course.trim().is_empty() {
            warnings.push(RosterWarning {
                student: Some(row.student.clone()),
                message: "empty course name".into(),
            });
        }
        if row.grade == 0 {
            warnings.push(RosterWarning {
                student: Some(row.student.clone()),
                message: format!("grade 0 for {} will be ignored", row.course),
            });
        }
        if !seen_rows.insert(row) {
            warnings.push(RosterWarning {
                student: Some(row.student.clone()),
                message: format!("duplicate enrollment: {} {}", row.course, row.grade),
            });
        }
    }

    warnings
}
