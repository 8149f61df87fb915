//! Daily class schedule.
//!
//! A fixed, in-memory list of class sessions. Sessions are seeded at start
//! and never added or removed; the only mutation is the completion toggle.
//! Populating the set from configuration or a sync source would be an
//! external collaborator's job.

use serde::{Deserialize, Serialize};

/// A scheduled class session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub course: String,
    /// Wall-clock start, `HH:mm`, no date or timezone.
    pub start_time: String,
    /// Wall-clock end, `HH:mm`.
    pub end_time: String,
    pub location: String,
    /// Freely togglable; nothing ties it to `end_time` having passed.
    pub completed: bool,
}

/// The day's class sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSchedule {
    sessions: Vec<ClassSession>,
}

impl ClassSchedule {
    /// The starter schedule.
    pub fn seeded() -> Self {
        let session = |id: &str, course: &str, start: &str, end: &str, location: &str| {
            ClassSession {
                id: id.into(),
                course: course.into(),
                start_time: start.into(),
                end_time: end.into(),
                location: location.into(),
                completed: false,
            }
        };
        Self {
            sessions: vec![
                session("c1", "Math 101", "09:00", "10:30", "Room B2"),
                session("c2", "Intro to CS", "11:00", "12:30", "Lab 3"),
                session("c3", "History", "14:00", "15:00", "Room A1"),
            ],
        }
    }

    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    /// Flip the completion flag of the matching session.
    ///
    /// Unknown ids are a no-op; returns whether a session matched.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.completed = !session.completed;
                true
            }
            None => false,
        }
    }
}

impl Default for ClassSchedule {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_schedule_has_three_sessions() {
        let schedule = ClassSchedule::seeded();
        assert_eq!(schedule.sessions().len(), 3);
        assert!(schedule.sessions().iter().all(|s| !s.completed));
    }

    #[test]
    fn toggle_flips_completion() {
        let mut schedule = ClassSchedule::seeded();
        assert!(schedule.toggle_completed("c2"));
        assert!(schedule.sessions()[1].completed);
        assert!(schedule.toggle_completed("c2"));
        assert!(!schedule.sessions()[1].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut schedule = ClassSchedule::seeded();
        assert!(!schedule.toggle_completed("c9"));
        assert!(schedule.sessions().iter().all(|s| !s.completed));
    }

    #[test]
    fn session_serialization() {
        let schedule = ClassSchedule::seeded();
        let json = serde_json::to_string(&schedule.sessions()[0]).unwrap();
        let decoded: ClassSession = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.course, "Math 101");
        assert_eq!(decoded.start_time, "09:00");
    }
}
