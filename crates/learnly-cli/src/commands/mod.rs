pub mod assignment;
pub mod config;
pub mod day;
pub mod resources;
pub mod schedule;
pub mod timer;
pub mod tips;

use chrono::{DateTime, Utc};

/// Short human date for due dates, e.g. `Thu, Aug 6`.
pub fn pretty_date(at: &DateTime<Utc>) -> String {
    at.format("%a, %b %-d").to_string()
}

/// `[x]` / `[ ]` marker for completion flags.
pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}
