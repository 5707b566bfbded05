//! Session-wide enrollment state shared by every view that renders it

use crate::model::structs::CourseInfo;
use std::sync::{Arc, Mutex};

/// Ordered list of enrolled courses behind a shared handle.
///
/// Cloning the store clones the handle, not the list; every clone observes
/// the same state. Created empty at composition time and dropped with the
/// session, nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentStore {
    enrolled: Arc<Mutex<Vec<CourseInfo>>>,
}

impl EnrollmentStore {
    pub fn new() -> EnrollmentStore {
        EnrollmentStore::default()
    }

    /// Appends unconditionally; the duplicate guard belongs to the caller
    pub fn enroll(&self, course: CourseInfo) {
        self.enrolled.lock().unwrap().push(course);
    }

    /// Removes every entry with the given course number, keeping the rest in order
    pub fn drop_course(&self, course_number: &str) {
        self.enrolled
            .lock()
            .unwrap()
            .retain(|course| course.course_number != course_number);
    }

    /// Snapshot of the current enrollment sequence, in insertion order
    pub fn enrolled_courses(&self) -> Vec<CourseInfo> {
        self.enrolled.lock().unwrap().clone()
    }

    pub fn is_enrolled(&self, course_number: &str) -> bool {
        self.enrolled
            .lock()
            .unwrap()
            .iter()
            .any(|course| course.course_number == course_number)
    }

    pub fn count(&self) -> usize {
        self.enrolled.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str) -> CourseInfo {
        CourseInfo {
            trimester: "1".to_string(),
            course_number: number.to_string(),
            course_name: format!("Course {number}"),
            semester_credits: 3.0,
            total_clock_hours: 45.0,
        }
    }

    #[test]
    fn starts_empty() {
        let store = EnrollmentStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.enrolled_courses().is_empty());
    }

    #[test]
    fn enroll_then_drop_is_identity() {
        let store = EnrollmentStore::new();
        store.enroll(course("A1"));
        let before: Vec<String> = store
            .enrolled_courses()
            .iter()
            .map(|c| c.course_number.clone())
            .collect();

        store.enroll(course("B2"));
        store.drop_course("B2");

        let after: Vec<String> = store
            .enrolled_courses()
            .iter()
            .map(|c| c.course_number.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn drop_preserves_relative_order() {
        let store = EnrollmentStore::new();
        store.enroll(course("A1"));
        store.enroll(course("B2"));
        store.enroll(course("C3"));

        store.drop_course("B2");

        let numbers: Vec<String> = store
            .enrolled_courses()
            .iter()
            .map(|c| c.course_number.clone())
            .collect();
        assert_eq!(numbers, vec!["A1", "C3"]);
    }

    #[test]
    fn drop_removes_every_matching_entry() {
        // the store itself performs no duplicate check
        let store = EnrollmentStore::new();
        store.enroll(course("A1"));
        store.enroll(course("A1"));
        assert_eq!(store.count(), 2);

        store.drop_course("A1");
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn drop_of_unknown_number_is_a_no_op() {
        let store = EnrollmentStore::new();
        store.enroll(course("A1"));
        store.drop_course("Z9");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn clones_share_the_same_state() {
        let store = EnrollmentStore::new();
        let header_handle = store.clone();

        store.enroll(course("A1"));
        assert_eq!(header_handle.count(), 1);
        assert!(header_handle.is_enrolled("A1"));
    }
}
