//! The day view: today's classes plus upcoming assignments, optionally
//! narrowed by a search query.

use chrono::Utc;
use learnly_core::search::filter;
use learnly_core::{AssignmentStore, ClassSchedule, Searchable};
use serde_json::json;

use super::{checkbox, pretty_date};

pub fn run(search: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = ClassSchedule::seeded();
    let assignments = AssignmentStore::seeded(Utc::now());
    let query = search.unwrap_or_default();

    let classes = filter(&query, schedule.sessions());
    let upcoming = assignments.upcoming();
    let upcoming: Vec<_> = upcoming
        .into_iter()
        .filter(|a| a.matches(&query))
        .collect();

    if json {
        let out = json!({
            "classes": classes,
            "upcoming_assignments": upcoming,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", Utc::now().format("%A, %B %-d"));
    println!();
    println!("Today's Classes");
    if classes.is_empty() {
        println!("  (no matches)");
    }
    for session in classes {
        println!(
            "  {} {}  {} - {}  {}",
            checkbox(session.completed),
            session.course,
            session.start_time,
            session.end_time,
            session.location
        );
    }

    println!();
    println!("Upcoming Assignments");
    if upcoming.is_empty() {
        println!("  No upcoming assignments. You're all caught up!");
    }
    for assignment in upcoming {
        println!(
            "  {} {}  {}  due {}",
            checkbox(assignment.completed),
            assignment.title,
            assignment.course,
            pretty_date(&assignment.due_at)
        );
    }
    Ok(())
}
