//! Class schedule commands.

use clap::Subcommand;
use learnly_core::ClassSchedule;

use super::checkbox;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// List today's class sessions
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle completion of a session and print the schedule
    Toggle {
        /// Session ID
        id: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_schedule(schedule: &ClassSchedule, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(schedule.sessions())?);
        return Ok(());
    }
    for session in schedule.sessions() {
        println!(
            "{} {}  {}  {} - {}  {}",
            checkbox(session.completed),
            session.id,
            session.course,
            session.start_time,
            session.end_time,
            session.location
        );
    }
    Ok(())
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut schedule = ClassSchedule::seeded();

    match action {
        ScheduleAction::List { json } => print_schedule(&schedule, json)?,
        ScheduleAction::Toggle { id, json } => {
            if !schedule.toggle_completed(&id) {
                println!("No session with id {id}");
            }
            print_schedule(&schedule, json)?;
        }
    }
    Ok(())
}
