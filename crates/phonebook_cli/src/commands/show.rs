//! Show command implementation.

use phonebook_api::PersonId;
use phonebook_client::PersonsApi;

/// Runs the show command.
pub fn run(server: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::connect(server)?;

    match client.transport().get(&PersonId::new(id)) {
        Ok(person) => {
            println!("id:     {}", person.id.as_str());
            println!("name:   {}", person.name);
            println!("number: {}", person.number);
            Ok(())
        }
        Err(err) if err.is_gone() => {
            eprintln!("person not found");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
