//! Error types for the phonebook client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the phonebook server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server was never reached, or its answer was unreadable.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with an error status.
    #[error("server error: status {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `{"error": ...}` message, when the body carried
        /// a well-formed one.
        message: Option<String>,
    },
}

impl ClientError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport(message.into())
    }

    /// Creates an API error without a server message.
    pub fn api(status: u16) -> Self {
        ClientError::Api {
            status,
            message: None,
        }
    }

    /// Creates an API error carrying the server's message.
    pub fn api_with_message(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: Some(message.into()),
        }
    }

    /// The HTTP status of the failure, when one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(_) => None,
        }
    }

    /// The trimmed, non-empty server-supplied message, when present.
    ///
    /// Callers deciding whether to surface the server's own words (a 400
    /// validation message) or a generic failure line go through this.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => {
                let message = message.trim();
                (!message.is_empty()).then_some(message)
            }
            _ => None,
        }
    }

    /// Returns true if the record this operation targeted no longer
    /// exists on the server.
    pub fn is_gone(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_api_errors() {
        assert_eq!(ClientError::api(400).status(), Some(400));
        assert_eq!(ClientError::transport("refused").status(), None);
    }

    #[test]
    fn server_message_is_trimmed_and_filtered() {
        let err = ClientError::api_with_message(400, "  name must be unique  ");
        assert_eq!(err.server_message(), Some("name must be unique"));

        assert_eq!(ClientError::api_with_message(400, "   ").server_message(), None);
        assert_eq!(ClientError::api(400).server_message(), None);
        assert_eq!(ClientError::transport("x").server_message(), None);
    }

    #[test]
    fn gone_is_exactly_404() {
        assert!(ClientError::api(404).is_gone());
        assert!(!ClientError::api(400).is_gone());
        assert!(!ClientError::transport("x").is_gone());
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            ClientError::transport("connection refused").to_string(),
            "transport error: connection refused"
        );
        assert_eq!(ClientError::api(404).to_string(), "server error: status 404");
    }
}
