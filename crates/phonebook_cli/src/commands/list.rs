//! List command implementation.

use phonebook_client::RefreshOutcome;

/// Runs the list command.
pub fn run(server: &str, filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::connect(server)?;

    match client.refresh() {
        RefreshOutcome::Loaded(_) => {}
        RefreshOutcome::Failed(err) => {
            super::print_notification(&client);
            return Err(err.into());
        }
        RefreshOutcome::Cancelled => return Ok(()),
    }

    if let Some(filter) = filter {
        client.set_filter(filter);
    }

    let visible = client.visible();
    if visible.is_empty() {
        println!("(no entries)");
        return Ok(());
    }

    for person in visible {
        println!(
            "{:<12} {:<24} {}",
            person.id.as_str(),
            person.name,
            person.number
        );
    }
    Ok(())
}
