//! Assignment tracking.
//!
//! An in-memory store of assignment records. The raw list keeps the most
//! recently added record first; the `upcoming()` view re-sorts by due date.
//! Nothing is persisted -- the store reseeds on every start.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier, generated at creation.
    pub id: String,
    pub title: String,
    pub course: String,
    /// Absolute due instant.
    pub due_at: DateTime<Utc>,
    pub completed: bool,
}

impl Assignment {
    /// Create a new assignment with a generated id.
    ///
    /// Does not validate the strings; the store does that on `add`.
    pub fn new(
        title: impl Into<String>,
        course: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Assignment {
            id: format!("assignment-{}-{}", Utc::now().timestamp(), Uuid::new_v4()),
            title: title.into(),
            course: course.into(),
            due_at,
            completed: false,
        }
    }
}

/// In-memory assignment store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentStore {
    assignments: Vec<Assignment>,
}

impl AssignmentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The starter assignments: a problem set due tomorrow and a reading
    /// due in two days. `now` is passed in so seeding is deterministic.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        store.assignments = vec![
            Assignment {
                id: "a1".into(),
                title: "Problem Set 3".into(),
                course: "Math 101".into(),
                due_at: now + Duration::days(1),
                completed: false,
            },
            Assignment {
                id: "a2".into(),
                title: "Read Ch. 2-3".into(),
                course: "History".into(),
                due_at: now + Duration::days(2),
                completed: false,
            },
        ];
        store
    }

    /// Raw backing list, most recently added first.
    pub fn all(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Add an assignment to the head of the list.
    ///
    /// Title and course are trimmed; if either trims to empty the call is
    /// ignored and `None` is returned. A missing due date defaults to now.
    pub fn add(
        &mut self,
        title: &str,
        course: &str,
        due_at: Option<DateTime<Utc>>,
    ) -> Option<&Assignment> {
        let title = title.trim();
        let course = course.trim();
        if title.is_empty() || course.is_empty() {
            return None;
        }
        let created = Assignment::new(title, course, due_at.unwrap_or_else(Utc::now));
        self.assignments.insert(0, created);
        self.assignments.first()
    }

    /// Flip the completion flag of the matching record.
    ///
    /// Unknown ids are a no-op; returns whether a record matched.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        match self.assignments.iter_mut().find(|a| a.id == id) {
            Some(assignment) => {
                assignment.completed = !assignment.completed;
                true
            }
            None => false,
        }
    }

    /// Derived view: non-completed assignments, soonest due first.
    ///
    /// Ties keep insertion order (the backing list is newest-first, so it
    /// is walked back to front before the stable sort).
    pub fn upcoming(&self) -> Vec<&Assignment> {
        let mut upcoming: Vec<&Assignment> = self
            .assignments
            .iter()
            .rev()
            .filter(|a| !a.completed)
            .collect();
        upcoming.sort_by_key(|a| a.due_at);
        upcoming
    }
}
