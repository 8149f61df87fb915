//! # Learnly Core Library
//!
//! This library provides the core business logic for the Learnly study
//! companion. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any richer front end being a
//! thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a caller-ticked state machine alternating focus and
//!   break intervals; the caller invokes `tick()` once per elapsed second
//! - **Planner Stores**: in-memory class schedule and assignment stores with
//!   derived views (no persistence -- state reseeds on every start)
//! - **Learning Hub**: curated external resources and a categorized study
//!   tips browser
//! - **Search**: case-insensitive substring filtering over the stores
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`AssignmentStore`]: assignment tracking and the upcoming view
//! - [`ClassSchedule`]: fixed daily class sessions with completion toggles
//! - [`Config`]: application configuration management

pub mod assignment;
pub mod config;
pub mod error;
pub mod events;
pub mod hub;
pub mod opener;
pub mod schedule;
pub mod search;
pub mod timer;

pub use assignment::{Assignment, AssignmentStore};
pub use config::{Config, NotificationsConfig, TimerConfig};
pub use error::{ConfigError, CoreError, OpenError};
pub use events::{Event, Notification, Notifier};
pub use hub::{Icon, Resource, StudyTip, TipCategory};
pub use schedule::{ClassSchedule, ClassSession};
pub use search::{filter, Searchable};
pub use timer::{Intervals, Phase, TimerEngine, TimerState};
