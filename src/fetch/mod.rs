//! Store access
//!
//! A `Store` is anything that can hand back the whole guestbook text and
//! append one fragment to it. `Fetcher` runs each call on its own worker
//! thread and hands the caller a `Pending` handle to wait on or drop.

mod file;
mod http;
#[cfg(test)]
pub(crate) mod memory;
#[cfg(test)]
pub(crate) mod stub;

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::codec::Fragment;
use crate::error::FetchError;

pub(crate) use file::FileStore;
pub(crate) use http::HttpStore;

pub(crate) trait Store: Send + Sync {
    /// Where the store lives, for status lines
    fn describe(&self) -> String;

    /// Read the full store text
    fn read(&self) -> Result<String, FetchError>;

    /// Append one encoded fragment
    fn write(&self, fragment: &str) -> Result<(), FetchError>;
}

/// Shared handle for dynamic dispatch across worker threads
pub(crate) type SharedStore = Arc<dyn Store>;

/// Result of a request still running on its worker thread
#[must_use = "wait on the request or detach it explicitly"]
pub(crate) struct Pending<T> {
    handle: JoinHandle<Result<T, FetchError>>,
}

impl<T: Send + 'static> Pending<T> {
    fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<T, FetchError> + Send + 'static,
    {
        Pending {
            handle: thread::spawn(job),
        }
    }

    /// Block until the request completes
    pub(crate) fn wait(self) -> Result<T, FetchError> {
        self.handle
            .join()
            .unwrap_or_else(|_| Err(FetchError::WorkerPanicked))
    }

    /// Let the request finish on its own; its outcome is never observed
    pub(crate) fn detach(self) {}
}

#[derive(Clone)]
pub(crate) struct Fetcher {
    store: SharedStore,
}

impl Fetcher {
    pub(crate) fn new(store: SharedStore) -> Self {
        Fetcher { store }
    }

    pub(crate) fn describe(&self) -> String {
        self.store.describe()
    }

    /// Start reading the store.
    ///
    /// The page waits on reads right away; `Pending` earns its keep on the
    /// write side, where `detach` gives the fire-and-forget submit. Reads share
    /// the same handle so a caller can overlap one with other work.
    pub(crate) fn read(&self) -> Pending<String> {
        let store = Arc::clone(&self.store);
        Pending::spawn(move || store.read())
    }

    /// Start appending a fragment; wait on the handle or detach it
    pub(crate) fn write(&self, fragment: Fragment) -> Pending<()> {
        let store = Arc::clone(&self.store);
        Pending::spawn(move || store.write(fragment.as_str()))
    }
}
