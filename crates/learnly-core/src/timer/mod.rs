//! Study timer: phases, interval durations, and the engine.

mod engine;

pub use engine::{TimerEngine, TimerState};

use serde::{Deserialize, Serialize};

/// Which kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    /// The phase that follows this one.
    pub fn next(self) -> Phase {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }
}

/// Per-phase countdown durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervals {
    /// Focus interval duration in seconds.
    pub focus_secs: u32,
    /// Break interval duration in seconds.
    pub break_secs: u32,
}

impl Intervals {
    /// Build from whole minutes.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn from_minutes(focus_min: u32, break_min: u32) -> Self {
        Self {
            focus_secs: focus_min.saturating_mul(60),
            break_secs: break_min.saturating_mul(60),
        }
    }

    /// Duration of the given phase in seconds.
    pub fn secs_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_secs,
            Phase::Break => self.break_secs,
        }
    }
}

impl Default for Intervals {
    /// 25 minutes of focus, 5 minutes of break.
    fn default() -> Self {
        Self::from_minutes(25, 5)
    }
}
