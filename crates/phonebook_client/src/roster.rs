//! The roster: a client-local mirror of the server directory.

use parking_lot::RwLock;
use phonebook_api::{normalize, Person, PersonId};
use std::sync::atomic::{AtomicBool, Ordering};

/// The record list a front end renders, plus the filter applied to it.
///
/// The roster is eventually consistent with the server: a list fetch
/// replaces it wholesale, and confirmed creates and deletes patch it
/// incrementally. Every id in here was confirmed present on the server at
/// some point; nothing is ever added speculatively.
#[derive(Debug)]
pub struct Roster {
    persons: RwLock<Vec<Person>>,
    filter: RwLock<String>,
    loading: AtomicBool,
}

impl Roster {
    /// Creates an empty roster in its initial-loading state.
    pub fn new() -> Self {
        Self {
            persons: RwLock::new(Vec::new()),
            filter: RwLock::new(String::new()),
            loading: AtomicBool::new(true),
        }
    }

    /// True until the first list fetch settles (other than by
    /// cancellation). Mutations are refused while this holds.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Marks the initial load as settled.
    pub fn finish_loading(&self) {
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Replaces the whole mirror with a freshly fetched directory.
    pub fn replace_all(&self, persons: Vec<Person>) {
        *self.persons.write() = persons;
    }

    /// Appends a server-confirmed record.
    pub fn append(&self, person: Person) {
        self.persons.write().push(person);
    }

    /// Removes the record with the given id, returning it if present.
    ///
    /// Removing an absent id is a quiet `None` on purpose: the
    /// stale-delete path converges by removing an id the server already
    /// dropped, and that must not be an error here.
    pub fn remove(&self, id: &PersonId) -> Option<Person> {
        let mut persons = self.persons.write();
        let index = persons.iter().position(|p| &p.id == id)?;
        Some(persons.remove(index))
    }

    /// Snapshot of the full mirror in insertion order.
    pub fn persons(&self) -> Vec<Person> {
        self.persons.read().clone()
    }

    /// Number of records in the mirror.
    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    /// True when the mirror holds no records.
    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }

    /// Returns true if the mirror holds the given id.
    pub fn contains(&self, id: &PersonId) -> bool {
        self.persons.read().iter().any(|p| &p.id == id)
    }

    /// Finds the record whose name matches `name` under normalization.
    pub fn find_by_normalized_name(&self, name: &str) -> Option<Person> {
        let wanted = normalize(name);
        self.persons
            .read()
            .iter()
            .find(|p| p.normalized_name() == wanted)
            .cloned()
    }

    /// Sets the filter text.
    pub fn set_filter(&self, text: impl Into<String>) {
        *self.filter.write() = text.into();
    }

    /// The current filter text, verbatim.
    pub fn filter(&self) -> String {
        self.filter.read().clone()
    }

    /// The visible subset: records whose name contains the filter text,
    /// case-insensitively. Pure derivation; the mirror is untouched.
    pub fn visible(&self) -> Vec<Person> {
        let needle = normalize(&self.filter.read());
        let persons = self.persons.read();
        if needle.is_empty() {
            return persons.clone();
        }
        persons
            .iter()
            .filter(|p| p.normalized_name().contains(&needle))
            .cloned()
            .collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
