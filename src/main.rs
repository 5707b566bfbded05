use school_catalog_core::app::catalog::{CatalogView, EnrollOutcome, handle_enroll};
use school_catalog_core::app::enrollment::EnrollmentStore;
use school_catalog_core::app::request::{load_catalog, tui};
use school_catalog_core::client::request::create_client;
use school_catalog_core::error::Result;
use school_catalog_core::model::dtos::SortKey;

const DEFAULT_CATALOG_URL: &str = "http://localhost:5173/api/courses.json";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        println!("Usage: {} [catalog-url]", args[0]);
        return Ok(());
    }

    let catalog_url = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CATALOG_URL);

    let client = create_client().await?;

    // One fetch per session; a failure short-circuits the whole UI
    let courses = match load_catalog(&client, catalog_url).await {
        Ok(courses) => courses,
        Err(e) => {
            println!("Error fetching data: {e}");
            return Ok(());
        }
    };

    let store = EnrollmentStore::new();
    let mut view = CatalogView::new(courses);

    tui::print_usage();

    loop {
        tui::print_header(&store);
        tui::print_catalog_page(&view);

        let Some(line) = tui::read_command()? else {
            break;
        };

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "search" => view.handle_search(rest),
            "sort" => match SortKey::parse(rest) {
                Some(key) => view.handle_sort(key),
                None => println!("Unknown column: {rest}"),
            },
            "next" => {
                if view.has_next_page() {
                    view.next_page();
                } else {
                    println!("Already on the last page");
                }
            }
            "prev" => {
                if view.has_previous_page() {
                    view.previous_page();
                } else {
                    println!("Already on the first page");
                }
            }
            "enroll" => match view.find_course(rest) {
                Some(course) => match handle_enroll(&store, course) {
                    EnrollOutcome::Enrolled => {
                        println!("Enrolled in [{}] {}", course.course_number, course.course_name)
                    }
                    EnrollOutcome::AlreadyEnrolled => println!("This course is already enrolled"),
                },
                None => println!("No course numbered {rest} in the catalog"),
            },
            "drop" => store.drop_course(rest),
            "enrolled" => tui::print_enrolled(&store),
            "help" => tui::print_usage(),
            "quit" | "exit" => break,
            "" => {}
            _ => {
                println!("Unknown command: {command}");
                tui::print_usage();
            }
        }
    }

    Ok(())
}
