//! The student registry and its mutations.
//!
//! Students are kept in registration order. Re-registering a name resets its
//! record but keeps its original position, so "first student wins" tie-breaks
//! in the summary always refer to first registration.

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::model::{Enrollment, StudentRecord};

/// What `add_course` did with an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseOutcome {
    /// The enrollment was added to the student's record.
    Recorded,
    /// Grade 0 means "not completed"; nothing was recorded.
    IgnoredZeroGrade,
    /// The exact `(course, grade)` pair was already present.
    AlreadyRecorded,
}

/// In-memory mapping from student name to record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    students: IndexMap<String, StudentRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with no completed courses.
    ///
    /// An existing record under the same name is silently reset.
    pub fn add_student(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self
            .students
            .insert(name.clone(), StudentRecord::NoCourses)
            .is_some()
        {
            tracing::debug!("reset record for {name}");
        } else {
            tracing::debug!("registered {name}");
        }
    }

    /// Record a completed course for an already registered student.
    ///
    /// The record stays sorted descending by `(course, grade)`.
    pub fn add_course(
        &mut self,
        name: &str,
        enrollment: impl Into<Enrollment>,
    ) -> Result<CourseOutcome, RegistryError> {
        let enrollment = enrollment.into();
        let record = self
            .students
            .get_mut(name)
            .ok_or_else(|| RegistryError::StudentNotFound(name.to_string()))?;

        if !enrollment.is_completed() {
            tracing::debug!("ignoring zero grade for {name}: {}", enrollment.course);
            return Ok(CourseOutcome::IgnoredZeroGrade);
        }

        match record {
            StudentRecord::NoCourses => {
                tracing::debug!("first course for {name}: {enrollment}");
                *record = StudentRecord::Courses(vec![enrollment]);
            }
            StudentRecord::Courses(courses) => {
                if courses.contains(&enrollment) {
                    return Ok(CourseOutcome::AlreadyRecorded);
                }
                tracing::debug!("course for {name}: {enrollment}");
                courses.push(enrollment);
                courses.sort_by(|a, b| b.cmp(a));
            }
        }

        Ok(CourseOutcome::Recorded)
    }

    /// Collapse repeated courses for every student, keeping the best grade.
    pub fn del_dups(&mut self) {
        let mut removed = 0usize;
        for record in self.students.values_mut() {
            removed += dedup_record(record);
        }
        if removed > 0 {
            tracing::debug!("dropped {removed} duplicate enrollment(s)");
        }
    }

    /// Collapse repeated courses for a single student.
    ///
    /// Returns `false` if `name` is not registered.
    pub fn dedup_student(&mut self, name: &str) -> bool {
        match self.students.get_mut(name) {
            Some(record) => {
                dedup_record(record);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&StudentRecord> {
        self.students.get(name)
    }

    /// Number of registered students, including those with no courses.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> {
        self.students.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Keep one enrollment per course, the one with the highest grade, and leave
/// the record in descending `(course, grade)` order. Returns how many
/// enrollments were dropped.
fn dedup_record(record: &mut StudentRecord) -> usize {
    let StudentRecord::Courses(courses) = record else {
        return 0;
    };
    let before = courses.len();
    courses.sort_by(|a, b| b.cmp(a));
    courses.dedup_by(|later, kept| later.course == kept.course);
    before - courses.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(registry: &Registry, name: &str) -> Vec<(String, u32)> {
        registry
            .get(name)
            .unwrap()
            .courses()
            .iter()
            .map(|e| (e.course.clone(), e.grade))
            .collect()
    }

    #[test]
    fn add_student_starts_with_no_courses() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        assert_eq!(registry.get("Peter"), Some(&StudentRecord::NoCourses));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_student_twice_resets_but_keeps_position() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        registry.add_student("Eliza");
        registry.add_course("Peter", ("A", 3)).unwrap();
        registry.add_student("Peter");

        assert_eq!(registry.get("Peter"), Some(&StudentRecord::NoCourses));
        let names: Vec<_> = registry.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Peter", "Eliza"]);
    }

    #[test]
    fn add_course_unknown_student() {
        let mut registry = Registry::new();
        let err = registry.add_course("Nobody", ("A", 3)).unwrap_err();
        assert_eq!(err, RegistryError::StudentNotFound("Nobody".into()));
    }

    #[test]
    fn add_course_unknown_student_with_zero_grade_still_fails() {
        let mut registry = Registry::new();
        assert!(registry.add_course("Nobody", ("A", 0)).is_err());
    }

    #[test]
    fn zero_grade_is_ignored() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        let outcome = registry.add_course("Peter", ("Intro", 0)).unwrap();
        assert_eq!(outcome, CourseOutcome::IgnoredZeroGrade);
        assert_eq!(registry.get("Peter"), Some(&StudentRecord::NoCourses));
    }

    #[test]
    fn exact_pair_is_recorded_once() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        assert_eq!(
            registry.add_course("Peter", ("A", 3)).unwrap(),
            CourseOutcome::Recorded
        );
        assert_eq!(
            registry.add_course("Peter", ("A", 3)).unwrap(),
            CourseOutcome::AlreadyRecorded
        );
        assert_eq!(registry.get("Peter").unwrap().completed(), 1);
    }

    #[test]
    fn courses_sorted_descending() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        registry.add_course("Peter", ("A", 3)).unwrap();
        registry.add_course("Peter", ("C", 1)).unwrap();
        registry.add_course("Peter", ("B", 5)).unwrap();
        registry.add_course("Peter", ("B", 2)).unwrap();

        assert_eq!(
            courses(&registry, "Peter"),
            vec![
                ("C".into(), 1),
                ("B".into(), 5),
                ("B".into(), 2),
                ("A".into(), 3),
            ]
        );
    }

    #[test]
    fn del_dups_keeps_highest_grade() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        registry.add_student("Eliza");
        registry.add_course("Peter", ("A", 2)).unwrap();
        registry.add_course("Peter", ("A", 5)).unwrap();
        registry.add_course("Peter", ("A", 4)).unwrap();
        registry.add_course("Peter", ("B", 1)).unwrap();

        registry.del_dups();

        assert_eq!(
            courses(&registry, "Peter"),
            vec![("B".into(), 1), ("A".into(), 5)]
        );
        assert_eq!(registry.get("Eliza"), Some(&StudentRecord::NoCourses));
    }

    #[test]
    fn dedup_does_not_depend_on_prior_order() {
        let mut record = StudentRecord::Courses(vec![
            Enrollment::new("A", 1),
            Enrollment::new("B", 2),
            Enrollment::new("A", 4),
        ]);
        assert_eq!(dedup_record(&mut record), 1);
        assert_eq!(
            record,
            StudentRecord::Courses(vec![Enrollment::new("B", 2), Enrollment::new("A", 4)])
        );
    }

    #[test]
    fn dedup_student_only_touches_one_record() {
        let mut registry = Registry::new();
        registry.add_student("Peter");
        registry.add_student("Eliza");
        for name in ["Peter", "Eliza"] {
            registry.add_course(name, ("A", 1)).unwrap();
            registry.add_course(name, ("A", 2)).unwrap();
        }

        assert!(registry.dedup_student("Peter"));
        assert!(!registry.dedup_student("Nobody"));

        assert_eq!(registry.get("Peter").unwrap().completed(), 1);
        assert_eq!(registry.get("Eliza").unwrap().completed(), 2);
    }
}
