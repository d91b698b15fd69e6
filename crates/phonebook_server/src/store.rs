//! In-memory person store.

use crate::error::{StoreError, StoreResult};
use parking_lot::RwLock;
use phonebook_api::{normalize, Person, PersonId};
use rand::Rng;
use std::fmt;

/// Exclusive upper bound of the id space; generated ids fall in [1, 10^9).
const ID_SPACE: u64 = 1_000_000_000;

/// The authoritative collection of person records.
///
/// The store owns the only mutable copy of the directory and enforces two
/// invariants no caller can bypass:
///
/// - every live record's id is server-assigned and unique among live
///   records (a freed id may be reused later, but never while its record
///   exists);
/// - every live record's name is unique under [`normalize`] (trim plus
///   case-fold).
///
/// Records keep insertion order. HTTP handlers run concurrently, so each
/// mutating operation holds the write lock for its whole
/// check-generate-append (or find-remove) sequence.
pub struct PersonStore {
    persons: RwLock<Vec<Person>>,
}

impl PersonStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            persons: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store preloaded with the given records.
    ///
    /// Seed data is trusted to satisfy the store invariants already; this
    /// is for tests and the `--seed` startup path, not for user input.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }

    /// Returns every record in insertion order.
    pub fn list(&self) -> Vec<Person> {
        self.persons.read().clone()
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &PersonId) -> Option<Person> {
        self.persons.read().iter().find(|p| &p.id == id).cloned()
    }

    /// Returns the number of live records.
    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }

    /// Creates a record from user-supplied name and number.
    ///
    /// Both fields are trimmed before validation: an empty or
    /// whitespace-only field fails with the matching `MissingField`
    /// (name checked first), and a normalized-name collision with a live
    /// record fails with `DuplicateName`. On success the record carries a
    /// freshly generated id and sits at the end of the collection.
    pub fn create(&self, name: &str, number: &str) -> StoreResult<Person> {
        let name = name.trim();
        let number = number.trim();

        if name.is_empty() {
            return Err(StoreError::missing_name());
        }
        if number.is_empty() {
            return Err(StoreError::missing_number());
        }

        // Duplicate scan, id generation, and append form one critical
        // section so two concurrent creates cannot both pass the checks.
        let mut persons = self.persons.write();

        let candidate = normalize(name);
        if persons.iter().any(|p| p.normalized_name() == candidate) {
            return Err(StoreError::DuplicateName);
        }

        let id = generate_id(&persons);
        let person = Person::new(id, name, number);
        persons.push(person.clone());
        Ok(person)
    }

    /// Removes the record with the given id.
    ///
    /// Returns the removed record, or `NotFound` when no live record has
    /// that id. A repeated delete is reported through the error, never by
    /// silently succeeding; clients rely on the 404 to detect staleness.
    pub fn remove(&self, id: &PersonId) -> StoreResult<Person> {
        let mut persons = self.persons.write();
        let index = persons
            .iter()
            .position(|p| &p.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(persons.remove(index))
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PersonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonStore")
            .field("person_count", &self.len())
            .finish_non_exhaustive()
    }
}

/// Draws uniform random ids from [1, [`ID_SPACE`]) until one is free among
/// the live records.
///
/// The loop is unbounded on purpose: id uniqueness is an invariant, not a
/// probability, and with the id space nine orders of magnitude larger than
/// any plausible directory a redraw is already rare.
fn generate_id(persons: &[Person]) -> PersonId {
    let mut rng = rand::thread_rng();
    loop {
        let candidate = rng.gen_range(1..ID_SPACE).to_string();
        if !persons.iter().any(|p| p.id.as_str() == candidate) {
            return PersonId::new(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PersonStore {
        PersonStore::with_persons(vec![
            Person::new("1", "Arto Hellas", "040-123456"),
            Person::new("2", "Ada Lovelace", "39-44-5323523"),
        ])
    }

    #[test]
    fn new_store_is_empty() {
        let store = PersonStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn create_returns_record_with_generated_id() {
        let store = PersonStore::new();
        let person = store.create("Arto Hellas", "040-123456").unwrap();

        assert!(!person.id.as_str().is_empty());
        assert_eq!(person.name, "Arto Hellas");
        assert_eq!(person.number, "040-123456");
        assert_eq!(store.list(), vec![person]);
    }

    #[test]
    fn create_trims_fields_before_storing() {
        let store = PersonStore::new();
        let person = store.create("  Arto Hellas  ", " 040-123456 ").unwrap();

        assert_eq!(person.name, "Arto Hellas");
        assert_eq!(person.number, "040-123456");
    }

    #[test]
    fn create_rejects_missing_name() {
        let store = PersonStore::new();
        assert_eq!(
            store.create("", "040-123456"),
            Err(StoreError::missing_name())
        );
        assert_eq!(
            store.create("   ", "040-123456"),
            Err(StoreError::missing_name())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn create_rejects_missing_number() {
        let store = PersonStore::new();
        assert_eq!(
            store.create("Arto Hellas", ""),
            Err(StoreError::missing_number())
        );
        assert_eq!(
            store.create("Arto Hellas", "  "),
            Err(StoreError::missing_number())
        );
    }

    #[test]
    fn name_is_checked_before_number() {
        let store = PersonStore::new();
        assert_eq!(store.create("  ", "  "), Err(StoreError::missing_name()));
    }

    #[test]
    fn create_rejects_duplicate_names_case_insensitively() {
        let store = seeded();
        assert_eq!(
            store.create("arto hellas", "000"),
            Err(StoreError::DuplicateName)
        );
        assert_eq!(
            store.create("  ARTO HELLAS  ", "000"),
            Err(StoreError::DuplicateName)
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn distinct_names_coexist() {
        let store = seeded();
        store.create("Dan Abramov", "12-43-234345").unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn created_ids_are_unique_and_in_range() {
        let store = PersonStore::new();
        let mut ids = std::collections::HashSet::new();
        for i in 0..100 {
            let person = store
                .create(&format!("person {i}"), &format!("555-{i:04}"))
                .unwrap();
            let numeric: u64 = person.id.as_str().parse().unwrap();
            assert!((1..ID_SPACE).contains(&numeric));
            assert!(ids.insert(person.id));
        }
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = PersonStore::new();
        let a = store.create("Arto Hellas", "1").unwrap();
        let b = store.create("Ada Lovelace", "2").unwrap();
        let c = store.create("Dan Abramov", "3").unwrap();
        assert_eq!(store.list(), vec![a, b, c]);
    }

    #[test]
    fn get_finds_by_id() {
        let store = seeded();
        let person = store.get(&PersonId::new("2")).unwrap();
        assert_eq!(person.name, "Ada Lovelace");
        assert!(store.get(&PersonId::new("999")).is_none());
    }

    #[test]
    fn remove_returns_the_record() {
        let store = seeded();
        let removed = store.remove(&PersonId::new("1")).unwrap();
        assert_eq!(removed.name, "Arto Hellas");
        assert_eq!(store.len(), 1);
        assert!(store.get(&PersonId::new("2")).is_some());
    }

    #[test]
    fn remove_missing_is_not_found() {
        let store = seeded();
        assert_eq!(
            store.remove(&PersonId::new("999")),
            Err(StoreError::NotFound)
        );

        store.remove(&PersonId::new("1")).unwrap();
        assert_eq!(
            store.remove(&PersonId::new("1")),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn removed_name_can_be_reused() {
        let store = seeded();
        store.remove(&PersonId::new("1")).unwrap();
        let person = store.create("ARTO HELLAS", "040-999999").unwrap();
        assert_eq!(person.name, "ARTO HELLAS");
    }

    #[test]
    fn with_persons_seeds_the_collection() {
        let store = seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, PersonId::new("1"));
    }
}
