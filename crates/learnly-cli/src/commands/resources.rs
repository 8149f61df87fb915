//! Curated learning resource commands.

use clap::Subcommand;
use learnly_core::opener::open_resource;
use learnly_core::Resource;

#[derive(Subcommand)]
pub enum ResourcesAction {
    /// List the curated resources
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a resource in the default browser
    Open {
        /// Resource ID (see `resources list`)
        id: String,
    },
}

pub fn run(action: ResourcesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ResourcesAction::List { json } => {
            let resources = Resource::builtin();
            if json {
                println!("{}", serde_json::to_string_pretty(&resources)?);
            } else {
                for resource in resources {
                    println!("{}  {}  {}", resource.id, resource.title, resource.description);
                    println!("     {}", resource.url);
                }
            }
        }
        ResourcesAction::Open { id } => {
            let Some(resource) = Resource::find(&id) else {
                println!("No resource with id {id} (see `resources list`)");
                return Ok(());
            };
            // An open failure is surfaced but never fatal.
            match open_resource(&resource.url) {
                Ok(()) => println!("Opened {}", resource.url),
                Err(e) => eprintln!("could not open resource: {e}"),
            }
        }
    }
    Ok(())
}
