//! # Phonebook Server
//!
//! In-memory phonebook service with a JSON HTTP surface.
//!
//! This crate provides:
//! - [`PersonStore`], the single owner of the record collection
//! - The REST surface (list, fetch, create, delete) plus `/info`
//! - Per-request logging in the classic method/url/status/time shape
//!
//! # Architecture
//!
//! The store is the only component allowed to touch the directory; the
//! HTTP layer is a pure translation between the wire contract and store
//! calls. Handlers run concurrently on the async runtime, so every
//! mutating store operation is a single critical section under one write
//! lock.
//!
//! # Invariants
//!
//! - Ids are server-assigned, unique among live records, and opaque to
//!   clients; any id supplied in a create body is ignored.
//! - Names are unique under trim + case-fold normalization.
//! - Validation order is fixed: missing name, then missing number, then
//!   duplicate name.

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Production code MUST NOT use panic!/unwrap()/expect() - tests are exempt
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod http;
mod seed;
mod server;
mod store;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{StoreError, StoreResult};
pub use http::{router, router_with};
pub use seed::sample_persons;
pub use server::PhonebookServer;
pub use store::PersonStore;
