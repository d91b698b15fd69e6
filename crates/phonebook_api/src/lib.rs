//! # Phonebook API
//!
//! Wire types shared by the phonebook server and client.
//!
//! This crate provides:
//! - Person records with opaque server-assigned ids
//! - Create-request and error-body payload shapes
//! - The name normalization both uniqueness checks agree on
//!
//! ## Architecture
//!
//! This is a pure types crate: no I/O, no HTTP, no storage. Everything
//! here is exactly what crosses the wire as JSON, so the serde shapes are
//! part of the service contract and must not drift.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod payload;
mod person;

pub use payload::{ErrorBody, NewPerson};
pub use person::{normalize, Person, PersonId};
