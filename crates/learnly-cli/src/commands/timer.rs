//! Study timer commands.
//!
//! `run` drives the engine live: a one-second tokio interval calls
//! `tick()`, and the loop exits (dropping the interval) the moment the
//! engine stops running, so no stale tick can fire into a stopped engine.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use learnly_core::{Config, Notifier, Phase, TimerEngine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer in the foreground
    Run {
        /// Focus interval in minutes (overrides configuration)
        #[arg(long)]
        focus_min: Option<u32>,
        /// Break interval in minutes (overrides configuration)
        #[arg(long)]
        break_min: Option<u32>,
        /// How many intervals to run before exiting
        #[arg(long, default_value = "2")]
        intervals: u32,
    },
    /// Print the initial timer state as JSON
    Status,
}

/// Notifier that writes alerts to the terminal with a bell.
struct ConsoleNotifier {
    enabled: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) {
        if self.enabled {
            println!("\x07{title} {message}");
        }
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Focus => "Study Time",
        Phase::Break => "Break Time",
    }
}

fn format_remaining(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;

    match action {
        TimerAction::Run { focus_min, break_min, intervals } => {
            if let Some(minutes) = focus_min {
                config.timer.focus_minutes = minutes;
            }
            if let Some(minutes) = break_min {
                config.timer.break_minutes = minutes;
            }
            let engine = TimerEngine::new(config.intervals());
            let notifier = ConsoleNotifier {
                enabled: config.notifications.enabled,
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_intervals(engine, &notifier, intervals))?;
        }
        TimerAction::Status => {
            let engine = TimerEngine::new(config.intervals());
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }
    Ok(())
}

async fn run_intervals(
    mut engine: TimerEngine,
    notifier: &dyn Notifier,
    mut remaining_intervals: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    while remaining_intervals > 0 {
        engine.start();
        println!("{}  {}", phase_label(engine.phase()), format_remaining(engine.remaining_secs()));

        // The interval lives only while the engine runs; leaving this
        // scope cancels it before the engine is restarted or dropped.
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.tick().await; // First tick fires immediately; consume it.
        while engine.is_running() {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Some(event) = engine.tick() {
                        if let Some(n) = event.notification() {
                            println!();
                            notifier.notify(&n.title, &n.message);
                        }
                    } else {
                        print!("\r{}  {} ", phase_label(engine.phase()), format_remaining(engine.remaining_secs()));
                        std::io::stdout().flush()?;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    engine.pause();
                    println!();
                    println!("Paused at {}", format_remaining(engine.remaining_secs()));
                    return Ok(());
                }
            }
        }
        remaining_intervals -= 1;
    }
    Ok(())
}
