//! Per-student reports and the JSON summary document.

use std::fmt;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{format_average, Enrollment, NO_COURSES_TEXT};
use crate::registry::Registry;
use crate::statistics::Summary;

/// How much of the registry a per-student report deduplicates.
///
/// The printed report is the same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupScope {
    /// Deduplicate every student before reporting.
    #[default]
    Registry,
    /// Deduplicate only the student being reported.
    Student,
}

/// What the registry knows about one queried name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StudentReport {
    /// The name was never registered.
    NotFound { name: String },
    /// Registered, nothing completed.
    NoCourses { name: String },
    /// Completed courses in record order with their mean grade.
    Completed {
        name: String,
        courses: Vec<Enrollment>,
        average: f64,
    },
}

impl fmt::Display for StudentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentReport::NotFound { name } => {
                write!(f, "{name}: no such person in the database")
            }
            StudentReport::NoCourses { name } => write!(f, "{name}:\n {NO_COURSES_TEXT}"),
            StudentReport::Completed {
                name,
                courses,
                average,
            } => {
                writeln!(f, "{name}:")?;
                writeln!(f, " {} completed courses:", courses.len())?;
                for enrollment in courses {
                    writeln!(f, "  {enrollment}")?;
                }
                write!(f, " average grade {}", format_average(*average))
            }
        }
    }
}

impl Registry {
    /// Build the report for `name`, deduplicating the whole registry first.
    pub fn student_report(&mut self, name: &str) -> StudentReport {
        self.student_report_with(name, DedupScope::Registry)
    }

    /// Build the report for `name` with an explicit deduplication scope.
    pub fn student_report_with(&mut self, name: &str, scope: DedupScope) -> StudentReport {
        let has_courses = match self.get(name) {
            None => {
                return StudentReport::NotFound {
                    name: name.to_string(),
                }
            }
            Some(record) => record.has_courses(),
        };
        if !has_courses {
            return StudentReport::NoCourses {
                name: name.to_string(),
            };
        }

        match scope {
            DedupScope::Registry => self.del_dups(),
            DedupScope::Student => {
                self.dedup_student(name);
            }
        }

        let record = self.get(name).cloned().unwrap_or_default();
        match record.average() {
            Some(average) => StudentReport::Completed {
                name: name.to_string(),
                courses: record.courses().to_vec(),
                average,
            },
            None => StudentReport::NoCourses {
                name: name.to_string(),
            },
        }
    }

    /// Print the report for `name` to stdout. Unknown names print a message.
    pub fn print_student(&mut self, name: &str) {
        println!("{}", self.student_report(name));
    }
}

/// A summary wrapped with the time it was produced, for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// When the summary was computed.
    pub generated_at: DateTime<Utc>,
    /// The aggregate figures.
    #[serde(flatten)]
    pub summary: Summary,
}

impl SummaryReport {
    pub fn new(summary: Summary) -> Self {
        Self {
            generated_at: Utc::now(),
            summary,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize summary")
    }
}
