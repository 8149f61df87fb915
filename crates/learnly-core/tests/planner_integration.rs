//! Integration tests for the planner stores and the search layer together,
//! mirroring how the presentation layer drives them.

use chrono::{DateTime, Duration, Utc};
use learnly_core::search::filter;
use learnly_core::{AssignmentStore, ClassSchedule};

fn now() -> DateTime<Utc> {
    "2026-08-06T09:00:00Z".parse().unwrap()
}

#[test]
fn seeded_day_view() {
    let schedule = ClassSchedule::seeded();
    let assignments = AssignmentStore::seeded(now());

    assert_eq!(schedule.sessions().len(), 3);

    let upcoming = assignments.upcoming();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].title, "Problem Set 3");
    assert_eq!(upcoming[1].title, "Read Ch. 2-3");
}

#[test]
fn added_assignment_sorts_into_place() {
    let mut store = AssignmentStore::seeded(now());
    store.add("Lab Report", "Chem 102", Some(now() + Duration::hours(6)));

    let upcoming = store.upcoming();
    assert_eq!(upcoming.len(), 3);
    // Due in six hours, so ahead of the problem set due tomorrow.
    assert_eq!(upcoming[0].title, "Lab Report");
    assert_eq!(upcoming[1].title, "Problem Set 3");

    // The raw list still leads with the newest record.
    assert_eq!(store.all()[0].title, "Lab Report");
}

#[test]
fn completing_and_reopening_moves_through_the_view() {
    let mut store = AssignmentStore::seeded(now());

    store.toggle_completed("a1");
    assert_eq!(store.upcoming().len(), 1);

    store.toggle_completed("a1");
    let upcoming = store.upcoming();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].id, "a1");
}

#[test]
fn rejected_add_leaves_every_view_unchanged() {
    let mut store = AssignmentStore::seeded(now());
    store.add("  ", "Bio", None);
    store.add("\t", "", None);

    assert_eq!(store.len(), 2);
    assert_eq!(store.upcoming().len(), 2);
}

#[test]
fn search_spans_classes_and_assignments() {
    let schedule = ClassSchedule::seeded();
    let assignments = AssignmentStore::seeded(now());

    // "math" hits the class and the assignment via their course field.
    let classes = filter("math", schedule.sessions());
    let matching = filter("math", assignments.all());
    assert_eq!(classes.len(), 1);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title, "Problem Set 3");

    // Empty query leaves both lists intact.
    assert_eq!(filter("", schedule.sessions()).len(), 3);
    assert_eq!(filter("", assignments.all()).len(), 2);
}

#[test]
fn search_sees_newly_added_records() {
    let mut store = AssignmentStore::seeded(now());
    store.add("Midterm review", "Intro to CS", None);

    let hits = filter("intro", store.all());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Midterm review");
}
