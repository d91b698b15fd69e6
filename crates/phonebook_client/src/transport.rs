//! Transport abstraction for the phonebook API.

use crate::error::{ClientError, ClientResult};
use parking_lot::Mutex;
use phonebook_api::{NewPerson, Person, PersonId};

/// The network operations a phonebook client needs from the server.
///
/// This trait abstracts the HTTP layer, allowing different implementations
/// (reqwest against a live server, an in-process loopback, a scripted mock
/// for tests).
pub trait PersonsApi: Send + Sync {
    /// Fetches the full directory.
    fn list(&self) -> ClientResult<Vec<Person>>;

    /// Fetches one record by id.
    fn get(&self, id: &PersonId) -> ClientResult<Person>;

    /// Creates a record and returns it with its server-assigned id.
    fn create(&self, new_person: &NewPerson) -> ClientResult<Person>;

    /// Deletes the record with the given id.
    fn remove(&self, id: &PersonId) -> ClientResult<()>;
}

/// Callback a mock runs while a call is in flight.
type Hook = Box<dyn FnMut() + Send>;

/// Number of calls a [`MockApi`] has served, per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    /// Served `list` calls.
    pub list: usize,
    /// Served `get` calls.
    pub get: usize,
    /// Served `create` calls.
    pub create: usize,
    /// Served `remove` calls.
    pub remove: usize,
}

/// A scripted transport for tests.
///
/// Responses are set up front and replayed on every call. The optional
/// hooks fire once, during the next matching call, which lets a test
/// cancel a fetch midway or re-enter the engine while a request is in
/// flight. A hook is taken out of its slot before it runs, so re-entering
/// the transport from inside one cannot recurse into the same hook.
#[derive(Default)]
pub struct MockApi {
    list_result: Mutex<Option<ClientResult<Vec<Person>>>>,
    get_result: Mutex<Option<ClientResult<Person>>>,
    create_result: Mutex<Option<ClientResult<Person>>>,
    remove_result: Mutex<Option<ClientResult<()>>>,
    on_list: Mutex<Option<Hook>>,
    on_create: Mutex<Option<Hook>>,
    on_remove: Mutex<Option<Hook>>,
    calls: Mutex<CallCounts>,
}

impl MockApi {
    /// Creates a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the list response.
    pub fn set_list(&self, result: ClientResult<Vec<Person>>) {
        *self.list_result.lock() = Some(result);
    }

    /// Scripts the get response.
    pub fn set_get(&self, result: ClientResult<Person>) {
        *self.get_result.lock() = Some(result);
    }

    /// Scripts the create response.
    pub fn set_create(&self, result: ClientResult<Person>) {
        *self.create_result.lock() = Some(result);
    }

    /// Scripts the remove response.
    pub fn set_remove(&self, result: ClientResult<()>) {
        *self.remove_result.lock() = Some(result);
    }

    /// Installs a one-shot hook that fires during the next list call.
    pub fn set_list_hook(&self, hook: impl FnMut() + Send + 'static) {
        *self.on_list.lock() = Some(Box::new(hook));
    }

    /// Installs a one-shot hook that fires during the next create call.
    pub fn set_create_hook(&self, hook: impl FnMut() + Send + 'static) {
        *self.on_create.lock() = Some(Box::new(hook));
    }

    /// Installs a one-shot hook that fires during the next remove call.
    pub fn set_remove_hook(&self, hook: impl FnMut() + Send + 'static) {
        *self.on_remove.lock() = Some(Box::new(hook));
    }

    /// Returns how many calls the mock has served so far.
    pub fn calls(&self) -> CallCounts {
        *self.calls.lock()
    }
}

impl MockApi {
    /// Takes and fires a pending hook without holding its slot locked.
    fn fire(slot: &Mutex<Option<Hook>>) {
        let hook = slot.lock().take();
        if let Some(mut hook) = hook {
            hook();
        }
    }
}

impl PersonsApi for MockApi {
    fn list(&self) -> ClientResult<Vec<Person>> {
        self.calls.lock().list += 1;
        Self::fire(&self.on_list);
        self.list_result
            .lock()
            .clone()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted list response")))
    }

    fn get(&self, _id: &PersonId) -> ClientResult<Person> {
        self.calls.lock().get += 1;
        self.get_result
            .lock()
            .clone()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted get response")))
    }

    fn create(&self, _new_person: &NewPerson) -> ClientResult<Person> {
        self.calls.lock().create += 1;
        Self::fire(&self.on_create);
        self.create_result
            .lock()
            .clone()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted create response")))
    }

    fn remove(&self, _id: &PersonId) -> ClientResult<()> {
        self.calls.lock().remove += 1;
        Self::fire(&self.on_remove);
        self.remove_result
            .lock()
            .clone()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted remove response")))
    }
}
