//! Aggregate statistics across all registered students.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::format_average;
use crate::registry::Registry;

/// The student with the most completed courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLeader {
    pub name: String,
    pub completed: usize,
}

/// The student with the highest mean grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageLeader {
    pub name: String,
    pub average: f64,
}

/// Aggregate figures for the whole registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Registered students, including those with no completed courses.
    pub students: usize,
    /// `None` when nobody has completed a course.
    pub most_courses: Option<CourseLeader>,
    /// `None` when nobody has completed a course.
    pub best_average: Option<AverageLeader>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "students {}", self.students)?;
        match &self.most_courses {
            Some(leader) => writeln!(
                f,
                "most courses completed {} {}",
                leader.completed, leader.name
            )?,
            None => writeln!(f)?,
        }
        match &self.best_average {
            Some(leader) => write!(
                f,
                "best average grade {} {}",
                format_average(leader.average),
                leader.name
            ),
            None => Ok(()),
        }
    }
}

/// Per-student figures, one row per registered student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStats {
    pub name: String,
    pub completed: usize,
    /// `None` for students with no completed courses.
    pub average: Option<f64>,
}

impl Registry {
    /// Deduplicate, then find the leaders in a single pass.
    ///
    /// Comparisons are strict against a running best that starts at zero, so
    /// the first student in registration order wins ties and students with
    /// no completed courses never lead.
    pub fn summary(&mut self) -> Summary {
        self.del_dups();

        let mut most_courses: Option<CourseLeader> = None;
        let mut best_average: Option<AverageLeader> = None;

        for (name, record) in self.iter() {
            let Some(average) = record.average() else {
                continue;
            };
            let completed = record.completed();

            let best_count = most_courses.as_ref().map_or(0, |l| l.completed);
            if completed > best_count {
                most_courses = Some(CourseLeader {
                    name: name.to_string(),
                    completed,
                });
            }

            let best_avg = best_average.as_ref().map_or(0.0, |l| l.average);
            if average > best_avg {
                best_average = Some(AverageLeader {
                    name: name.to_string(),
                    average,
                });
            }
        }

        tracing::debug!(
            "summary over {} student(s): most={:?} best={:?}",
            self.len(),
            most_courses.as_ref().map(|l| &l.name),
            best_average.as_ref().map(|l| &l.name)
        );

        Summary {
            students: self.len(),
            most_courses,
            best_average,
        }
    }

    /// Print the summary to stdout.
    pub fn print_summary(&mut self) {
        println!("{}", self.summary());
    }

    /// Deduplicate, then list every student with their count and average.
    pub fn student_stats(&mut self) -> Vec<StudentStats> {
        self.del_dups();
        self.iter()
            .map(|(name, record)| StudentStats {
                name: name.to_string(),
                completed: record.completed(),
                average: record.average(),
            })
            .collect()
    }
}
