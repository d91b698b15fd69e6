//! Add command implementation.

use phonebook_client::{AddOutcome, RefreshOutcome};

/// Runs the add command.
pub fn run(
    server: &str,
    name: &str,
    number: &str,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::connect(server)?;

    if let RefreshOutcome::Failed(err) = client.refresh() {
        super::print_notification(&client);
        return Err(err.into());
    }

    let outcome = if force {
        client.add_confirmed(name, number)
    } else {
        client.add(name, number)
    };

    // The pre-check answer is a question for the user, not a failure.
    let outcome = match outcome {
        AddOutcome::DuplicateOf(existing) => {
            println!(
                "{} is already added to phonebook ({})",
                existing.name, existing.number
            );
            if !super::confirm("add anyway?")? {
                return Ok(());
            }
            client.add_confirmed(name, number)
        }
        other => other,
    };

    match outcome {
        AddOutcome::Added(person) => {
            println!("Added {} with id {}", person.name, person.id.as_str());
            Ok(())
        }
        AddOutcome::Ignored => {
            eprintln!("name and number must not be empty");
            std::process::exit(1);
        }
        AddOutcome::Failed(err) => {
            super::print_notification(&client);
            Err(err.into())
        }
        // Loading settled before we got here and nothing else is using
        // this engine, so neither gate can fire.
        AddOutcome::Blocked | AddOutcome::InFlight | AddOutcome::DuplicateOf(_) => Ok(()),
    }
}
