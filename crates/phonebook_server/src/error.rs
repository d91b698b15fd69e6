//! Error types for the phonebook server.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when mutating the person store.
///
/// The `Display` strings double as the wire-level `{"error": ...}`
/// messages, so they must stay exactly as the HTTP contract spells them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was empty after trimming.
    #[error("{field} missing")]
    MissingField {
        /// Which field was missing: `"name"` or `"number"`.
        field: &'static str,
    },

    /// Another live record already holds this name under normalization.
    #[error("name must be unique")]
    DuplicateName,

    /// No live record has the requested id.
    #[error("person not found")]
    NotFound,
}

impl StoreError {
    /// Creates a missing-field error for the name field.
    pub fn missing_name() -> Self {
        StoreError::MissingField { field: "name" }
    }

    /// Creates a missing-field error for the number field.
    pub fn missing_number() -> Self {
        StoreError::MissingField { field: "number" }
    }

    /// The HTTP status code this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            StoreError::MissingField { .. } | StoreError::DuplicateName => 400,
            StoreError::NotFound => 404,
        }
    }

    /// Returns true if this is a validation failure (400).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingField { .. } | StoreError::DuplicateName
        )
    }

    /// Returns true if this is a missing-record failure (404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_messages() {
        assert_eq!(StoreError::missing_name().to_string(), "name missing");
        assert_eq!(StoreError::missing_number().to_string(), "number missing");
        assert_eq!(StoreError::DuplicateName.to_string(), "name must be unique");
        assert_eq!(StoreError::NotFound.to_string(), "person not found");
    }

    #[test]
    fn status_codes() {
        assert_eq!(StoreError::missing_name().status(), 400);
        assert_eq!(StoreError::DuplicateName.status(), 400);
        assert_eq!(StoreError::NotFound.status(), 404);
    }

    #[test]
    fn classification() {
        assert!(StoreError::missing_number().is_validation());
        assert!(StoreError::DuplicateName.is_validation());
        assert!(!StoreError::NotFound.is_validation());
        assert!(StoreError::NotFound.is_not_found());
    }
}
