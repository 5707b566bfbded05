//! No-WASM application implementation
//!
//! This module contains the application logic for non-WASM environments:
//! loading the catalog over reqwest plus the terminal rendering used by
//! the interactive binary.

use crate::app::catalog::parse_catalog;
use crate::client::request::{self, NoWasmClient};
use crate::error::Result;
use crate::model::structs::CourseInfo;

/// One fetch per session; the caller decides what a failure means
pub async fn load_catalog(client: &NoWasmClient, catalog_url: &str) -> Result<Vec<CourseInfo>> {
    let document = request::fetch_catalog(client, catalog_url).await?;
    parse_catalog(document)
}

// Terminal rendering for the interactive binary
#[cfg(feature = "tui")]
pub mod tui {
    use crate::app::catalog::{CatalogView, total_pages};
    use crate::app::enrollment::EnrollmentStore;
    use crate::error::Result;

    pub fn print_header(store: &EnrollmentStore) {
        println!("Classes Enrolled: {}", store.count());
    }

    pub fn print_catalog_page(view: &CatalogView) {
        println!("==================School Catalog==================");
        if !view.query.search.is_empty() {
            println!("Search: {}", view.query.search);
        }
        println!(
            "{:<10}{:<16}{:<28}{:<9}{:<7}",
            "Trimester", "Number", "Name", "Credits", "Hours"
        );
        for course in view.current_courses() {
            println!(
                "{:<10}{:<16}{:<28}{:<9}{:<7}",
                course.trimester,
                course.course_number,
                course.course_name,
                course.semester_credits,
                course.total_clock_hours
            );
        }
        println!("==================================================");
        println!(
            "Page {} / {}",
            view.query.page,
            total_pages(view.filtered_courses().len())
        );
    }

    pub fn print_enrolled(store: &EnrollmentStore) {
        println!("==================Enrolled Courses================");
        for course in store.enrolled_courses() {
            println!("{:<16}{:<28}", course.course_number, course.course_name);
        }
        println!("==================================================");
    }

    pub fn print_usage() {
        println!("Commands:");
        println!("  search <text>     filter by course number or name");
        println!("  sort <column>     trimester | number | name | credits | hours");
        println!("  next / prev       page through the catalog");
        println!("  enroll <number>   enroll in a course");
        println!("  drop <number>     drop an enrolled course");
        println!("  enrolled          list enrolled courses");
        println!("  quit");
    }

    /// Reads one command line; None on end of input
    pub fn read_command() -> Result<Option<String>> {
        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}
