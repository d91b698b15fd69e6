//! Person records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a person record.
///
/// Ids are opaque tokens: the server assigns one at creation time and
/// clients only ever compare them for equality or echo them back in URLs.
/// The current generator happens to produce decimal digit strings, but
/// nothing outside the server's store may rely on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Creates an id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A phonebook entry as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier.
    pub id: PersonId,
    /// Display name. Stored trimmed; unique under [`normalize`].
    pub name: String,
    /// Phone number. Stored trimmed; free-form otherwise.
    pub number: String,
}

impl Person {
    /// Creates a person record.
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Returns this person's name in normalized form.
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }
}

/// Normalizes a name for uniqueness comparison: surrounding whitespace is
/// trimmed, then the text is case-folded.
///
/// The server's uniqueness check and the client's duplicate pre-check must
/// agree on this exact form, which is why it lives in the shared crate.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
