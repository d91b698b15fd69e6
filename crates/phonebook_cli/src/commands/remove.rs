//! Remove command implementation.

use phonebook_api::PersonId;
use phonebook_client::{RefreshOutcome, RemoveOutcome};

/// Runs the remove command.
pub fn run(server: &str, id: &str, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::connect(server)?;

    if let RefreshOutcome::Failed(err) = client.refresh() {
        super::print_notification(&client);
        return Err(err.into());
    }

    let id = PersonId::new(id);
    let person = match client.persons().into_iter().find(|p| p.id == id) {
        Some(person) => person,
        None => {
            eprintln!("no person with id {} in the directory", id.as_str());
            std::process::exit(1);
        }
    };

    if !yes && !super::confirm(&format!("Delete {} ?", person.name))? {
        return Ok(());
    }

    match client.remove(&person) {
        RemoveOutcome::Removed => {
            println!("Deleted {}", person.name);
            Ok(())
        }
        RemoveOutcome::AlreadyGone => {
            super::print_notification(&client);
            Ok(())
        }
        RemoveOutcome::Failed(err) => {
            super::print_notification(&client);
            Err(err.into())
        }
        RemoveOutcome::Blocked | RemoveOutcome::InFlight => Ok(()),
    }
}
