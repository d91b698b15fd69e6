//! Serve command implementation.

use phonebook_server::{sample_persons, PhonebookServer, ServerConfig};
use std::net::SocketAddr;
use tracing::info;

/// Runs the serve command.
pub fn run(bind: Option<SocketAddr>, seed: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = match bind {
        Some(addr) => ServerConfig::new(addr),
        None => ServerConfig::from_env(),
    };

    let server = if seed {
        let persons = sample_persons();
        info!(count = persons.len(), "seeding directory");
        PhonebookServer::with_persons(config, persons)
    } else {
        PhonebookServer::new(config)
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server.serve())?;
    Ok(())
}
