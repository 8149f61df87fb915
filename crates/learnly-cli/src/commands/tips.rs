//! Study tips commands.

use clap::Subcommand;
use learnly_core::{StudyTip, TipCategory};

#[derive(Subcommand)]
pub enum TipsAction {
    /// List study tips
    List {
        /// Narrow to one category: focus, organization, retention, wellness
        #[arg(long)]
        category: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the tip categories
    Categories,
}

pub fn run(action: TipsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TipsAction::List { category, json } => {
            let wanted = match category.as_deref() {
                None => None,
                Some(raw) => match TipCategory::parse(raw) {
                    Some(parsed) => Some(parsed),
                    None => {
                        return Err(format!(
                            "unknown category '{raw}' (expected focus, organization, retention, or wellness)"
                        )
                        .into())
                    }
                },
            };
            let tips = StudyTip::in_category(wanted);
            if json {
                println!("{}", serde_json::to_string_pretty(&tips)?);
            } else {
                for tip in tips {
                    println!("[{}] {}", tip.category, tip.title);
                    println!("    {}", tip.description);
                }
            }
        }
        TipsAction::Categories => {
            for category in TipCategory::ALL {
                println!("{category}");
            }
        }
    }
    Ok(())
}
