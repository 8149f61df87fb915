//! Assignment tracking commands.
//!
//! State is not persisted: every invocation starts from the seeded store,
//! applies the operation, and prints the result so the effect is visible.

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;
use learnly_core::AssignmentStore;

use super::{checkbox, pretty_date};

#[derive(Subcommand)]
pub enum AssignmentAction {
    /// List the raw store, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List upcoming assignments, soonest due first
    Upcoming {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an assignment and print the resulting upcoming view
    Add {
        /// Assignment title
        title: String,
        /// Course name
        course: String,
        /// Due date (YYYY-MM-DD); defaults to now
        #[arg(long)]
        due: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle completion and print the resulting upcoming view
    Toggle {
        /// Assignment ID
        id: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// `YYYY-MM-DD` to end-of-day UTC; anything unparseable becomes `None`
/// (the store then defaults the due date to now).
fn parse_due(due: Option<&str>) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(due?.trim(), "%Y-%m-%d").ok()?;
    let end_of_day = date.and_hms_opt(23, 59, 59)?;
    Some(end_of_day.and_utc())
}

fn print_upcoming(store: &AssignmentStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let upcoming = store.upcoming();
    if json {
        println!("{}", serde_json::to_string_pretty(&upcoming)?);
        return Ok(());
    }
    if upcoming.is_empty() {
        println!("No upcoming assignments. You're all caught up!");
    }
    for assignment in upcoming {
        println!(
            "{} {}  {}  {}  due {}",
            checkbox(assignment.completed),
            assignment.id,
            assignment.title,
            assignment.course,
            pretty_date(&assignment.due_at)
        );
    }
    Ok(())
}

pub fn run(action: AssignmentAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = AssignmentStore::seeded(Utc::now());

    match action {
        AssignmentAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.all())?);
            } else {
                for assignment in store.all() {
                    println!(
                        "{} {}  {}  {}  due {}",
                        checkbox(assignment.completed),
                        assignment.id,
                        assignment.title,
                        assignment.course,
                        pretty_date(&assignment.due_at)
                    );
                }
            }
        }
        AssignmentAction::Upcoming { json } => {
            print_upcoming(&store, json)?;
        }
        AssignmentAction::Add { title, course, due, json } => {
            match store.add(&title, &course, parse_due(due.as_deref())) {
                Some(created) => println!("Added: {}", created.id),
                // Blank title/course is a silent no-op in the store; the
                // CLI at least says so.
                None => println!("Ignored: title and course must be non-empty"),
            }
            print_upcoming(&store, json)?;
        }
        AssignmentAction::Toggle { id, json } => {
            if !store.toggle_completed(&id) {
                println!("No assignment with id {id}");
            }
            print_upcoming(&store, json)?;
        }
    }
    Ok(())
}
