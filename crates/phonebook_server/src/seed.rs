//! Seed data for demos and tests.

use phonebook_api::Person;

/// The classic four-entry directory the service traditionally ships with.
///
/// Ids here are fixed small numbers so scripts and tests can refer to the
/// entries directly; records created at runtime get random ids instead.
pub fn sample_persons() -> Vec<Person> {
    vec![
        Person::new("1", "Arto Hellas", "040-123456"),
        Person::new("2", "Ada Lovelace", "39-44-5323523"),
        Person::new("3", "Dan Abramov", "12-43-234345"),
        Person::new("4", "Mary Poppendieck", "39-23-6423122"),
    ]
}
