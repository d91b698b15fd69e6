//! The client engine: request lifecycle over a view-model roster.

use crate::cancel::FetchGate;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::inflight::{InFlightSet, OpKey};
use crate::notify::{Notice, Notifier};
use crate::roster::Roster;
use crate::transport::PersonsApi;
use phonebook_api::{NewPerson, Person};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shown when a mutation is attempted before the first load settles.
const STILL_LOADING: &str = "Please wait, loading phonebook data...";
/// Shown when the directory cannot be fetched at all.
const LOAD_FAILED: &str = "Failed to load the phonebook. Make sure the backend is running.";
/// Shown when a create fails for any reason the server did not explain.
const SAVE_FAILED: &str = "Failed to save the person. Make sure the backend is running.";

/// Outcome of a list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The mirror was replaced with the server directory of this size.
    Loaded(usize),
    /// A newer fetch or a teardown superseded this one; nothing was
    /// applied, not even the loading flag.
    Cancelled,
    /// The fetch failed; the failure notification is showing.
    Failed(ClientError),
}

/// Outcome of an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The server confirmed the record and it was appended to the mirror.
    Added(Person),
    /// The initial load is still pending; nothing was sent.
    Blocked,
    /// Name or number was empty after trimming; nothing was sent.
    Ignored,
    /// The mirror already holds this name under normalization; nothing
    /// was sent. Ask the user, then retry via
    /// [`PhonebookClient::add_confirmed`].
    DuplicateOf(Person),
    /// A create is already in flight; this submission was dropped.
    InFlight,
    /// The server or transport rejected the create; the mirror is
    /// untouched and the failure notification is showing.
    Failed(ClientError),
}

/// Outcome of a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The server confirmed the delete and the record left the mirror.
    Removed,
    /// The initial load is still pending; nothing was sent.
    Blocked,
    /// The server had already dropped the record. The mirror converged
    /// (the record left it anyway) and the already-removed notification
    /// is showing.
    AlreadyGone,
    /// A delete of this record is already in flight; dropped.
    InFlight,
    /// The delete failed; the mirror is untouched and the failure
    /// notification is showing.
    Failed(ClientError),
}

/// Client engine for the phonebook service.
///
/// Wraps a [`PersonsApi`] transport with the request-lifecycle rules a
/// well-behaved front end needs:
///
/// - mutations are deduplicated per operation key while in flight;
/// - list fetches are cancellable, and a superseded fetch never touches
///   state;
/// - user feedback goes through a single-slot, auto-expiring notifier;
/// - the roster only ever reflects server-confirmed records.
///
/// All methods take `&self` and are safe to call from multiple threads;
/// no lock is held across a transport call.
pub struct PhonebookClient<T: PersonsApi> {
    config: ClientConfig,
    transport: Arc<T>,
    roster: Roster,
    inflight: InFlightSet,
    fetch_gate: Arc<FetchGate>,
    notifier: Notifier,
}

impl<T: PersonsApi> PhonebookClient<T> {
    /// Creates a client over the given transport.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            notifier: Notifier::with_ttl(config.notice_ttl),
            config,
            transport: Arc::new(transport),
            roster: Roster::new(),
            inflight: InFlightSet::new(),
            fetch_gate: Arc::new(FetchGate::new()),
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The notifier carrying user feedback for this client.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Fetches the directory and reconciles the mirror with it.
    ///
    /// The result is applied only if no newer fetch and no
    /// [`PhonebookClient::cancel_refresh`] superseded this call while it
    /// was in flight. A cancelled fetch is discarded wholesale: no mirror
    /// change, no notification, and the initial-loading flag stays put.
    pub fn refresh(&self) -> RefreshOutcome {
        let token = self.fetch_gate.open();
        let result = self.transport.list();

        if token.is_cancelled() {
            debug!("list fetch superseded, discarding result");
            return RefreshOutcome::Cancelled;
        }

        match result {
            Ok(persons) => {
                let count = persons.len();
                self.roster.replace_all(persons);
                self.roster.finish_loading();
                debug!(count, "directory loaded");
                RefreshOutcome::Loaded(count)
            }
            Err(err) => {
                warn!(error = %err, "list fetch failed");
                self.notifier.show(Notice::error(LOAD_FAILED));
                self.roster.finish_loading();
                RefreshOutcome::Failed(err)
            }
        }
    }

    /// Cancels any in-flight refresh (the teardown path).
    pub fn cancel_refresh(&self) {
        self.fetch_gate.invalidate();
    }

    /// Requests a create, running the local duplicate pre-check first.
    ///
    /// A [`AddOutcome::DuplicateOf`] answer means nothing was sent; the
    /// caller is expected to confirm with the user and come back through
    /// [`PhonebookClient::add_confirmed`].
    pub fn add(&self, name: &str, number: &str) -> AddOutcome {
        if self.roster.is_loading() {
            self.notifier.show(Notice::error(STILL_LOADING));
            return AddOutcome::Blocked;
        }

        let name = name.trim();
        let number = number.trim();
        if name.is_empty() || number.is_empty() {
            return AddOutcome::Ignored;
        }

        if let Some(existing) = self.roster.find_by_normalized_name(name) {
            return AddOutcome::DuplicateOf(existing);
        }

        self.dispatch_add(name, number)
    }

    /// Requests a create without the duplicate pre-check.
    ///
    /// This is the path taken once the user has explicitly confirmed a
    /// duplicate-looking entry. The server still validates independently,
    /// so a true duplicate comes back as a 400 with the server's message.
    pub fn add_confirmed(&self, name: &str, number: &str) -> AddOutcome {
        if self.roster.is_loading() {
            self.notifier.show(Notice::error(STILL_LOADING));
            return AddOutcome::Blocked;
        }

        let name = name.trim();
        let number = number.trim();
        if name.is_empty() || number.is_empty() {
            return AddOutcome::Ignored;
        }

        self.dispatch_add(name, number)
    }

    fn dispatch_add(&self, name: &str, number: &str) -> AddOutcome {
        // One create at a time: a second submission while this one is
        // pending must be dropped silently, not queued.
        let _permit = match self.inflight.begin(OpKey::Create) {
            Some(permit) => permit,
            None => {
                debug!("create already in flight, dropping submission");
                return AddOutcome::InFlight;
            }
        };

        match self.transport.create(&NewPerson::new(name, number)) {
            Ok(person) => {
                self.notifier
                    .show(Notice::success(format!("Added {}", person.name)));
                self.roster.append(person.clone());
                AddOutcome::Added(person)
            }
            Err(err) => {
                warn!(error = %err, "create failed");
                // A 400 carries the server's own validation words; show
                // those. Anything else gets the generic line.
                let message = match (err.status(), err.server_message()) {
                    (Some(400), Some(server)) => server.to_string(),
                    _ => SAVE_FAILED.to_string(),
                };
                self.notifier.show(Notice::error(message));
                AddOutcome::Failed(err)
            }
        }
    }

    /// Requests a delete of a record the caller already confirmed.
    ///
    /// The 404 answer is the one case that is not a failure: the server
    /// dropped the record earlier, so the mirror converges by dropping it
    /// too and the user is told the entry was already gone.
    pub fn remove(&self, person: &Person) -> RemoveOutcome {
        if self.roster.is_loading() {
            self.notifier.show(Notice::error(STILL_LOADING));
            return RemoveOutcome::Blocked;
        }

        let _permit = match self.inflight.begin(OpKey::Delete(person.id.clone())) {
            Some(permit) => permit,
            None => {
                debug!(id = %person.id, "delete already in flight, dropping submission");
                return RemoveOutcome::InFlight;
            }
        };

        match self.transport.remove(&person.id) {
            Ok(()) => {
                self.roster.remove(&person.id);
                RemoveOutcome::Removed
            }
            Err(err) if err.is_gone() => {
                self.roster.remove(&person.id);
                self.notifier.show(Notice::error(format!(
                    "Information of {} has already been removed from server",
                    person.name
                )));
                RemoveOutcome::AlreadyGone
            }
            Err(err) => {
                warn!(error = %err, "delete failed");
                self.notifier.show(Notice::error(format!(
                    "Failed to delete {}. Make sure the backend is running.",
                    person.name
                )));
                RemoveOutcome::Failed(err)
            }
        }
    }

    /// Sets the name filter applied by [`PhonebookClient::visible`].
    pub fn set_filter(&self, text: impl Into<String>) {
        self.roster.set_filter(text);
    }

    /// The current filter text.
    pub fn filter(&self) -> String {
        self.roster.filter()
    }

    /// Snapshot of the full mirror.
    pub fn persons(&self) -> Vec<Person> {
        self.roster.persons()
    }

    /// The filtered view of the mirror.
    pub fn visible(&self) -> Vec<Person> {
        self.roster.visible()
    }

    /// True until the first list fetch settles.
    pub fn is_loading(&self) -> bool {
        self.roster.is_loading()
    }

    /// The notification currently on screen, if any.
    pub fn notification(&self) -> Option<Notice> {
        self.notifier.current()
    }
}
