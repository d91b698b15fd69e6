//! # Phonebook Client
//!
//! Request-lifecycle engine and view model for the phonebook service.
//!
//! This crate provides:
//! - A transport abstraction over the JSON API, with reqwest and mock
//!   backends
//! - In-flight deduplication of mutating requests
//! - Cooperative cancellation of list fetches
//! - Single-slot, auto-expiring user notifications
//! - The roster: a filterable local mirror reconciled against confirmed
//!   server outcomes
//!
//! ## Architecture
//!
//! The engine is synchronous and blocking: each operation performs one
//! transport call and settles before returning, and concurrency comes
//! from calling the engine on several threads rather than from an async
//! runtime. Cancellation is cooperative; a generation token is checked
//! after a call settles and before its result may touch any state.
//!
//! ## Key Invariants
//!
//! - At most one mutating request per operation key is in flight.
//! - A superseded list fetch never mutates the roster.
//! - At most one notification is visible; the newest writer wins.
//! - The roster only ever holds server-confirmed records.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cancel;
mod client;
mod config;
mod error;
mod http;
mod inflight;
mod notify;
mod roster;
mod transport;

pub use cancel::{FetchGate, FetchToken};
pub use client::{AddOutcome, PhonebookClient, RefreshOutcome, RemoveOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestClient, RestApi};
pub use inflight::{InFlightPermit, InFlightSet, OpKey};
pub use notify::{Notice, NoticeKind, Notifier, DEFAULT_NOTICE_TTL};
pub use roster::Roster;
pub use transport::{CallCounts, MockApi, PersonsApi};
