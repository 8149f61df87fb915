//! Free-text filtering over the stores.
//!
//! A pure function from `(query, entities)` to the matching subset. The
//! query is matched case-insensitively as a substring of each entity's
//! searchable fields; an empty or whitespace-only query matches everything.

use crate::assignment::Assignment;
use crate::hub::{Resource, StudyTip};
use crate::schedule::ClassSession;

/// An entity the filter layer can match a query against.
pub trait Searchable {
    /// The text fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter `items` down to those matching `query`.
pub fn filter<'a, T: Searchable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(query)).collect()
}

impl Searchable for ClassSession {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.course, &self.location]
    }
}

impl Searchable for Assignment {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.course]
    }
}

impl Searchable for Resource {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

impl Searchable for StudyTip {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ClassSchedule;

    #[test]
    fn empty_query_matches_everything() {
        let schedule = ClassSchedule::seeded();
        assert_eq!(filter("", schedule.sessions()).len(), 3);
        assert_eq!(filter("   ", schedule.sessions()).len(), 3);
    }

    #[test]
    fn match_is_case_insensitive() {
        let schedule = ClassSchedule::seeded();
        let hits = filter("MATH", schedule.sessions());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].course, "Math 101");
    }

    #[test]
    fn matches_any_field() {
        let schedule = ClassSchedule::seeded();
        // "lab" only appears in a location.
        let hits = filter("lab", schedule.sessions());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].course, "Intro to CS");
    }

    #[test]
    fn substring_in_the_middle_matches() {
        let schedule = ClassSchedule::seeded();
        let hits = filter("istor", schedule.sessions());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].course, "History");
    }

    #[test]
    fn no_match_yields_empty() {
        let schedule = ClassSchedule::seeded();
        assert!(filter("astronomy", schedule.sessions()).is_empty());
    }
}
