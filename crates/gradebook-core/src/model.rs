//! Core data model types for gradebook.
//!
//! A student's record is either "no completed courses" or a non-empty list
//! of enrollments. The two states are separate variants so every reader has
//! to say which one it handles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text shown for a student who has not completed anything yet.
pub const NO_COURSES_TEXT: &str = "no completed courses";

/// A single completed course and the grade received for it.
///
/// Ordering is lexicographic on `(course, grade)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Enrollment {
    /// Course name.
    pub course: String,
    /// Grade received. Zero means the course was not actually completed.
    pub grade: u32,
}

impl Enrollment {
    pub fn new(course: impl Into<String>, grade: u32) -> Self {
        Self {
            course: course.into(),
            grade,
        }
    }

    /// Returns `true` if this grade counts as a completed course.
    pub fn is_completed(&self) -> bool {
        self.grade != 0
    }
}

impl<S: Into<String>> From<(S, u32)> for Enrollment {
    fn from((course, grade): (S, u32)) -> Self {
        Self::new(course, grade)
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.course, self.grade)
    }
}

/// Everything the registry knows about one student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "courses", rename_all = "snake_case")]
pub enum StudentRecord {
    /// Registered, nothing completed yet.
    #[default]
    NoCourses,
    /// At least one completed course, kept in descending `(course, grade)` order.
    Courses(Vec<Enrollment>),
}

impl StudentRecord {
    /// The recorded enrollments; empty for [`StudentRecord::NoCourses`].
    pub fn courses(&self) -> &[Enrollment] {
        match self {
            StudentRecord::NoCourses => &[],
            StudentRecord::Courses(courses) => courses,
        }
    }

    /// Number of recorded enrollments.
    pub fn completed(&self) -> usize {
        self.courses().len()
    }

    /// Sum of all recorded grades.
    pub fn grade_total(&self) -> u64 {
        self.courses().iter().map(|e| u64::from(e.grade)).sum()
    }

    /// Mean grade, or `None` when nothing has been completed.
    pub fn average(&self) -> Option<f64> {
        match self {
            StudentRecord::NoCourses => None,
            StudentRecord::Courses(courses) if courses.is_empty() => None,
            StudentRecord::Courses(courses) => {
                Some(self.grade_total() as f64 / courses.len() as f64)
            }
        }
    }

    pub fn has_courses(&self) -> bool {
        matches!(self, StudentRecord::Courses(c) if !c.is_empty())
    }
}

/// Format a mean grade the way reports print it: whole numbers keep one
/// decimal place (`4.0`), everything else uses the shortest exact form.
pub fn format_average(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_orders_by_course_then_grade() {
        let mut list = vec![
            Enrollment::new("B", 3),
            Enrollment::new("A", 5),
            Enrollment::new("B", 1),
        ];
        list.sort();
        assert_eq!(
            list,
            vec![
                Enrollment::new("A", 5),
                Enrollment::new("B", 1),
                Enrollment::new("B", 3),
            ]
        );
    }

    #[test]
    fn enrollment_from_tuple_and_display() {
        let e: Enrollment = ("Intro", 4).into();
        assert_eq!(e.to_string(), "Intro 4");
        assert!(e.is_completed());
        assert!(!Enrollment::new("Intro", 0).is_completed());
    }

    #[test]
    fn no_courses_has_no_average() {
        let record = StudentRecord::NoCourses;
        assert_eq!(record.completed(), 0);
        assert_eq!(record.average(), None);
        assert!(!record.has_courses());
    }

    #[test]
    fn courses_average() {
        let record = StudentRecord::Courses(vec![Enrollment::new("B", 5), Enrollment::new("A", 3)]);
        assert_eq!(record.completed(), 2);
        assert_eq!(record.grade_total(), 8);
        assert_eq!(record.average(), Some(4.0));
    }

    #[test]
    fn format_average_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_average(4.0), "4.0");
        assert_eq!(format_average(4.5), "4.5");
        assert_eq!(format_average(1.0), "1.0");
        assert_eq!(format_average(10.0 / 3.0), "3.3333333333333335");
    }

    #[test]
    fn record_serde_is_tagged() {
        let json = serde_json::to_string(&StudentRecord::NoCourses).unwrap();
        assert_eq!(json, r#"{"status":"no_courses"}"#);

        let record = StudentRecord::Courses(vec![Enrollment::new("CS", 4)]);
        let json = serde_json::to_string(&record).unwrap();
        let back: StudentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
