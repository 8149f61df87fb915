//! Timer events and user-facing notifications.
//!
//! Every timer state change produces an [`Event`]. The presentation layer
//! polls for events and turns interval completions into notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, TimerState};

/// Every state change in the timer produces an Event.
/// The presentation layer polls for events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// An interval ran down to zero. The engine has already stopped and
    /// reloaded itself for `started`.
    IntervalCompleted {
        ended: Phase,
        started: Phase,
        next_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        phase: Phase,
        remaining_secs: u32,
        total_secs: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// User-facing notification for this event, if it warrants one.
    ///
    /// Only interval completions notify; everything else is a direct
    /// response to user input.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Event::IntervalCompleted { ended, .. } => Some(match ended {
                Phase::Focus => Notification {
                    title: "Study Session Complete!".into(),
                    message: "Take a 5-minute break!".into(),
                },
                Phase::Break => Notification {
                    title: "Break Complete!".into(),
                    message: "Time to get back to studying!".into(),
                },
            }),
            _ => None,
        }
    }
}

/// A user-visible alert with a title and a short message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Fire-and-forget notification delivery.
///
/// Implementations must not block or fail loudly; a notification that
/// cannot be delivered is dropped.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_completion_notifies_break() {
        let event = Event::IntervalCompleted {
            ended: Phase::Focus,
            started: Phase::Break,
            next_secs: 300,
            at: Utc::now(),
        };
        let n = event.notification().unwrap();
        assert_eq!(n.title, "Study Session Complete!");
        assert_eq!(n.message, "Take a 5-minute break!");
    }

    #[test]
    fn break_completion_notifies_focus() {
        let event = Event::IntervalCompleted {
            ended: Phase::Break,
            started: Phase::Focus,
            next_secs: 1500,
            at: Utc::now(),
        };
        let n = event.notification().unwrap();
        assert_eq!(n.title, "Break Complete!");
    }

    #[test]
    fn reset_does_not_notify() {
        let event = Event::TimerReset { at: Utc::now() };
        assert!(event.notification().is_none());
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = Event::TimerReset { at: Utc::now() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"TimerReset\""));
    }
}
