//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port, matching the original deployment contract.
pub const DEFAULT_PORT: u16 = 3001;

/// Configuration for the phonebook server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Whether to log one line per handled request.
    pub log_requests: bool,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            log_requests: true,
        }
    }

    /// Sets the bind address.
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Sets only the port, keeping the configured host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// Enables or disables per-request logging.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Reads configuration from the environment.
    ///
    /// `PORT` overrides the default port when set to a valid number;
    /// anything else falls back to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self::default().with_port(port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::new(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            DEFAULT_PORT,
        ))
    }
}
