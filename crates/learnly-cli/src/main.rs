use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "learnly", version, about = "Learnly study companion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's classes and upcoming assignments
    Day {
        /// Filter classes and assignments by a search query
        #[arg(long)]
        search: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Study timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Assignment tracking
    Assignment {
        #[command(subcommand)]
        action: commands::assignment::AssignmentAction,
    },
    /// Class schedule
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Curated learning resources
    Resources {
        #[command(subcommand)]
        action: commands::resources::ResourcesAction,
    },
    /// Study tips browser
    Tips {
        #[command(subcommand)]
        action: commands::tips::TipsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Day { search, json } => commands::day::run(search, json),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Assignment { action } => commands::assignment::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Resources { action } => commands::resources::run(action),
        Commands::Tips { action } => commands::tips::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
