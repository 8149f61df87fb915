//! Timer engine implementation.
//!
//! The timer engine is a caller-ticked state machine. It does not use
//! internal threads or read the clock - the caller is responsible for
//! calling `tick()` once per elapsed second while the engine is running,
//! and for cancelling its tick source whenever the engine stops. A tick
//! that arrives while the engine is idle is ignored, so a stale tick from
//! a just-cancelled source cannot decrement the countdown twice.
//!
//! ## State Transitions
//!
//! ```text
//! Idle(Focus) <-> Running(Focus) --0--> Idle(Break) <-> Running(Break)
//!      ^                                                     |
//!      +--------------------------0--------------------------+
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Intervals::default());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::IntervalCompleted) at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Intervals, Phase};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Core timer engine.
///
/// Alternates focus and break intervals. Commands return `Some(Event)` when
/// they change state and `None` when they are permitted no-ops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    intervals: Intervals,
    state: TimerState,
    phase: Phase,
    /// Remaining time in seconds for the current interval.
    remaining_secs: u32,
}

impl TimerEngine {
    /// Create a new timer engine with the given interval durations.
    ///
    /// Starts in `Idle` on a full focus interval.
    pub fn new(intervals: Intervals) -> Self {
        Self {
            intervals,
            state: TimerState::Idle,
            phase: Phase::Focus,
            remaining_secs: intervals.secs_for(Phase::Focus),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Full duration of the current interval in seconds.
    pub fn total_secs(&self) -> u32 {
        self.intervals.secs_for(self.phase)
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    phase: self.phase,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running => None, // Already running.
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Idle;
                Some(Event::TimerPaused {
                    phase: self.phase,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Idle => None, // Already idle.
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.phase = Phase::Focus;
        self.remaining_secs = self.intervals.secs_for(Phase::Focus);
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Advance the countdown by one second.
    ///
    /// Call once per elapsed second while running. Returns
    /// `Some(Event::IntervalCompleted)` when the interval runs down to
    /// zero: the engine stops, flips to the next phase, and reloads the
    /// countdown with the new phase's duration in the same call. Ignored
    /// while idle.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None; // Stale tick after pause/reset.
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }
        let ended = self.phase;
        let started = ended.next();
        self.state = TimerState::Idle;
        self.phase = started;
        self.remaining_secs = self.intervals.secs_for(started);
        Some(Event::IntervalCompleted {
            ended,
            started,
            next_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Intervals::default())
    }
}
