//! In-flight tracking for mutating requests.

use parking_lot::Mutex;
use phonebook_api::PersonId;
use std::collections::HashSet;

/// Logical key of a mutating operation.
///
/// At most one operation per key may be in flight at a time. A create and
/// a delete are independent keys, as are deletes of different records;
/// only a true double-submission shares a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpKey {
    /// The single create slot.
    Create,
    /// Deletion of one specific record.
    Delete(PersonId),
}

/// The set of operation keys currently in flight.
///
/// [`InFlightSet::begin`] hands out a permit or refuses when the key is
/// taken. The permit releases its key on drop, which makes the release
/// unconditional on every exit path out of an operation.
#[derive(Debug, Default)]
pub struct InFlightSet {
    keys: Mutex<HashSet<OpKey>>,
}

impl InFlightSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to mark `key` as in flight.
    ///
    /// Returns `None` when an operation with this key is already pending.
    /// Callers must treat that as a silent no-op, not an error: the
    /// earlier submission is still doing the work.
    pub fn begin(&self, key: OpKey) -> Option<InFlightPermit<'_>> {
        if self.keys.lock().insert(key.clone()) {
            Some(InFlightPermit { set: self, key })
        } else {
            None
        }
    }

    /// Returns true if `key` is currently in flight.
    pub fn contains(&self, key: &OpKey) -> bool {
        self.keys.lock().contains(key)
    }

    /// Number of operations currently in flight.
    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    /// Returns true when nothing is in flight.
    pub fn is_empty(&self) -> bool {
        self.keys.lock().is_empty()
    }
}

/// Scoped hold on an operation key.
#[derive(Debug)]
pub struct InFlightPermit<'a> {
    set: &'a InFlightSet,
    key: OpKey,
}

impl Drop for InFlightPermit<'_> {
    fn drop(&mut self) {
        self.set.keys.lock().remove(&self.key);
    }
}
