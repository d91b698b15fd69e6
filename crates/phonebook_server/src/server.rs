//! Phonebook server facade.

use crate::config::ServerConfig;
use crate::http;
use crate::store::PersonStore;
use axum::Router;
use phonebook_api::Person;
use std::io;
use std::sync::Arc;
use tracing::info;

/// The phonebook HTTP server.
///
/// Owns the authoritative [`PersonStore`] and exposes the JSON API over
/// it. The store is shared behind an `Arc`, so embedders (tests, the CLI)
/// can keep a handle to inspect or pre-seed the directory while the
/// server runs.
#[derive(Debug)]
pub struct PhonebookServer {
    store: Arc<PersonStore>,
    config: ServerConfig,
}

impl PhonebookServer {
    /// Creates a server over an empty directory.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(PersonStore::new()))
    }

    /// Creates a server around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<PersonStore>) -> Self {
        Self { store, config }
    }

    /// Creates a server preloaded with the given records.
    pub fn with_persons(config: ServerConfig, persons: Vec<Person>) -> Self {
        Self::with_store(config, Arc::new(PersonStore::with_persons(persons)))
    }

    /// Returns the shared store handle.
    pub fn store(&self) -> Arc<PersonStore> {
        Arc::clone(&self.store)
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the number of live records.
    pub fn person_count(&self) -> usize {
        self.store.len()
    }

    /// Builds the axum router serving this store.
    ///
    /// Exposed separately from [`PhonebookServer::serve`] so tests can
    /// drive the full HTTP surface through a listener they control.
    pub fn router(&self) -> Router {
        http::router_with(Arc::clone(&self.store), self.config.log_requests)
    }

    /// Binds the configured address and serves requests until the task
    /// is dropped or the process exits.
    pub async fn serve(&self) -> io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;
        info!(addr = %listener.local_addr()?, "phonebook server listening");
        axum::serve(listener, self.router()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_persons;

    #[test]
    fn new_server_starts_empty() {
        let server = PhonebookServer::new(ServerConfig::default());
        assert_eq!(server.person_count(), 0);
    }

    #[test]
    fn with_persons_preloads_the_store() {
        let server = PhonebookServer::with_persons(ServerConfig::default(), sample_persons());
        assert_eq!(server.person_count(), 4);
        assert!(server.store().get(&"1".into()).is_some());
    }

    #[test]
    fn store_handle_is_shared() {
        let server = PhonebookServer::new(ServerConfig::default());
        let store = server.store();
        store.create("Arto Hellas", "040-123456").unwrap();
        assert_eq!(server.person_count(), 1);
    }
}
