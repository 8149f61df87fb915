//! Configuration management commands.

use clap::Subcommand;
use learnly_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Init => {
            let path = Config::path()?;
            if path.exists() {
                println!("Configuration already exists at {}", path.display());
            } else {
                Config::default().save()?;
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
