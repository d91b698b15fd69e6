//! CLI command implementations.

pub mod add;
pub mod list;
pub mod remove;
pub mod serve;
pub mod show;

use phonebook_client::{ClientConfig, PhonebookClient, ReqwestClient, RestApi};
use std::io::{self, Write};

/// Builds a client engine over a reqwest transport for `server`.
pub fn connect(
    server: &str,
) -> Result<PhonebookClient<RestApi<ReqwestClient>>, Box<dyn std::error::Error>> {
    let config = ClientConfig::new(server);
    let backend = ReqwestClient::new(&config)?;
    let api = RestApi::new(server, backend);
    Ok(PhonebookClient::new(config, api))
}

/// Asks a yes/no question and reads the answer from stdin.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Prints whatever notification the engine currently shows to stderr.
pub fn print_notification<T: phonebook_client::PersonsApi>(client: &PhonebookClient<T>) {
    if let Some(notice) = client.notification() {
        eprintln!("{}", notice.message);
    }
}
