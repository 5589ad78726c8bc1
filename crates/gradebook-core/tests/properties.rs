//! Property tests for course recording and deduplication.

use std::collections::HashMap;

use gradebook_core::{Enrollment, Registry, StudentRecord};
use proptest::prelude::*;

fn enrollments() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::vec(("[A-E]", 0u32..=5), 0..24)
}

fn registry_with(rows: &[(String, u32)]) -> Registry {
    let mut registry = Registry::new();
    registry.add_student("Peter");
    for (course, grade) in rows {
        registry
            .add_course("Peter", Enrollment::new(course.clone(), *grade))
            .unwrap();
    }
    registry
}

proptest! {
    #[test]
    fn zero_grades_never_change_a_record(
        rows in enrollments(),
        zeros in prop::collection::vec("[A-E]", 1..8),
    ) {
        let mut registry = registry_with(&rows);
        let before = registry.get("Peter").cloned();
        for course in zeros {
            registry.add_course("Peter", (course, 0)).unwrap();
        }
        prop_assert_eq!(registry.get("Peter").cloned(), before);
    }

    #[test]
    fn dedup_keeps_max_grade_per_course(rows in enrollments()) {
        let mut registry = registry_with(&rows);
        registry.del_dups();

        let mut expected: HashMap<&str, u32> = HashMap::new();
        for (course, grade) in rows.iter().filter(|(_, g)| *g != 0) {
            let best = expected.entry(course.as_str()).or_insert(0);
            *best = (*best).max(*grade);
        }

        let record = registry.get("Peter").unwrap();
        if expected.is_empty() {
            prop_assert_eq!(record, &StudentRecord::NoCourses);
        }
        let courses = record.courses();
        prop_assert_eq!(courses.len(), expected.len());
        for e in courses {
            prop_assert_eq!(expected.get(e.course.as_str()), Some(&e.grade));
        }
    }

    #[test]
    fn dedup_is_idempotent(rows in enrollments()) {
        let mut registry = registry_with(&rows);
        registry.del_dups();
        let once = registry.clone();
        registry.del_dups();
        prop_assert_eq!(registry, once);
    }

    #[test]
    fn records_stay_sorted_descending(rows in enrollments()) {
        let registry = registry_with(&rows);
        let courses = registry.get("Peter").unwrap().courses();
        prop_assert!(courses.windows(2).all(|w| w[0] >= w[1]));
    }
}
