//! Catalog pipeline: filter, sort and paginate the course snapshot
//!
//! The visible rows are a pure function of the snapshot and the current
//! query; every render recomputes the whole pipeline from scratch, nothing
//! is cached or invalidated.

use crate::app::enrollment::EnrollmentStore;
use crate::error::{ErrorKind, Result};
use crate::model::dtos::{CatalogQuery, SortConfig, SortDirection, SortKey};
use crate::model::structs::CourseInfo;
use serde_json::Value;
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 5;

/// Parses the catalog document: a bare JSON array of course objects
pub fn parse_catalog(document: Value) -> Result<Vec<CourseInfo>> {
    if !document.is_array() {
        return Err(ErrorKind::CatalogError("catalog document is not an array".to_string()).into());
    }

    Ok(serde_json::from_value(document)?)
}

/// Keeps a course iff the query is a case-insensitive substring of its
/// course number or course name. An empty query keeps everything.
pub fn filter_courses(courses: &[CourseInfo], search_query: &str) -> Vec<CourseInfo> {
    let query = search_query.to_lowercase();
    courses
        .iter()
        .filter(|course| {
            course.course_number.to_lowercase().contains(&query)
                || course.course_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn compare_by_key(a: &CourseInfo, b: &CourseInfo, key: SortKey) -> Ordering {
    match key {
        SortKey::Trimester => a.trimester.cmp(&b.trimester),
        SortKey::CourseNumber => a.course_number.cmp(&b.course_number),
        SortKey::CourseName => a.course_name.cmp(&b.course_name),
        SortKey::SemesterCredits => a
            .semester_credits
            .partial_cmp(&b.semester_credits)
            .unwrap_or(Ordering::Equal),
        SortKey::TotalClockHours => a
            .total_clock_hours
            .partial_cmp(&b.total_clock_hours)
            .unwrap_or(Ordering::Equal),
    }
}

/// Sorts by the configured column; no key preserves the incoming order.
/// `Vec::sort_by` is stable, so ties also preserve the incoming order.
pub fn sort_courses(mut courses: Vec<CourseInfo>, sort_config: &SortConfig) -> Vec<CourseInfo> {
    let Some(key) = sort_config.key else {
        return courses;
    };

    courses.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match sort_config.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    courses
}

/// Page `p` (1-based) is the slice `[(p-1)*5, p*5)`; a page past the end is empty
pub fn paginate_courses(courses: &[CourseInfo], page: usize) -> &[CourseInfo] {
    let first = page.saturating_sub(1) * PAGE_SIZE;
    if first >= courses.len() {
        return &[];
    }

    let last = (first + PAGE_SIZE).min(courses.len());
    &courses[first..last]
}

pub fn total_pages(course_count: usize) -> usize {
    course_count.div_ceil(PAGE_SIZE)
}

/// The whole pipeline in one pass: filter, sort, then cut the current page
pub fn run_query(courses: &[CourseInfo], query: &CatalogQuery) -> Vec<CourseInfo> {
    let sorted = sort_courses(filter_courses(courses, &query.search), &query.sort);
    paginate_courses(&sorted, query.page).to_vec()
}

/// Interaction state for the catalog table.
///
/// Holds the immutable snapshot plus the current query. The snapshot is set
/// once after the fetch; the query mutates through the handlers below.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    courses: Vec<CourseInfo>,
    pub query: CatalogQuery,
}

impl CatalogView {
    pub fn new(courses: Vec<CourseInfo>) -> CatalogView {
        CatalogView {
            courses,
            query: CatalogQuery::default(),
        }
    }

    pub fn filtered_courses(&self) -> Vec<CourseInfo> {
        filter_courses(&self.courses, &self.query.search)
    }

    pub fn sorted_courses(&self) -> Vec<CourseInfo> {
        sort_courses(self.filtered_courses(), &self.query.sort)
    }

    /// The rows visible on the current page
    pub fn current_courses(&self) -> Vec<CourseInfo> {
        run_query(&self.courses, &self.query)
    }

    /// Replacing the query does not touch the page; a page now past the end
    /// renders empty rather than clamping
    pub fn handle_search(&mut self, search_query: impl Into<String>) {
        self.query.search = search_query.into();
    }

    /// Selecting the active ascending column flips to descending; any other
    /// prior state resets to ascending on the selected column
    pub fn handle_sort(&mut self, key: SortKey) {
        let direction = if self.query.sort.key == Some(key)
            && self.query.sort.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        self.query.sort = SortConfig {
            key: Some(key),
            direction,
        };
    }

    pub fn has_previous_page(&self) -> bool {
        self.query.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.query.page < total_pages(self.filtered_courses().len())
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.query.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.query.page += 1;
        }
    }

    pub fn find_course(&self, course_number: &str) -> Option<&CourseInfo> {
        self.courses
            .iter()
            .find(|course| course.course_number == course_number)
    }
}

/// Outcome of an enroll attempt against the shared store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
}

/// The duplicate guard lives here, not in the store: a course number already
/// in the enrollment list is rejected without mutation.
pub fn handle_enroll(store: &EnrollmentStore, course: &CourseInfo) -> EnrollOutcome {
    if store.is_enrolled(&course.course_number) {
        EnrollOutcome::AlreadyEnrolled
    } else {
        store.enroll(course.clone());
        EnrollOutcome::Enrolled
    }
}
