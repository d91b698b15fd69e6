//! Request and error payload shapes.

use serde::{Deserialize, Serialize};

/// Body of a create request: the two user-supplied fields.
///
/// The server assigns the id itself; any id a caller smuggles into the
/// body is ignored, which is why there is no slot for one here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    /// Requested display name.
    pub name: String,
    /// Requested phone number.
    pub number: String,
}

impl NewPerson {
    /// Creates a new-person payload.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// The JSON error body every failing endpoint returns: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorBody {
    /// Creates an error payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
