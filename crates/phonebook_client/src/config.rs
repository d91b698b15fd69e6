//! Client configuration.

use crate::notify::DEFAULT_NOTICE_TTL;
use std::time::Duration;

/// Configuration for a phonebook client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the phonebook server.
    pub server_url: String,
    /// How long a notification stays visible before auto-clearing.
    pub notice_ttl: Duration,
    /// Request timeout for the HTTP backend.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given server URL.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            notice_ttl: DEFAULT_NOTICE_TTL,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the notification lifetime.
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:3001")
    }
}
