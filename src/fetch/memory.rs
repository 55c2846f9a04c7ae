use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::error::FetchError;
use crate::fetch::Store;

/// In-process store for tests; counts writes so callers can assert none happened
pub(crate) struct MemoryStore {
    contents: Mutex<String>,
    writes: AtomicUsize,
    fail_status: Option<u16>,
    write_delay: Option<Duration>,
}

impl MemoryStore {
    pub(crate) fn new(contents: &str) -> Self {
        MemoryStore {
            contents: Mutex::new(contents.to_string()),
            writes: AtomicUsize::new(0),
            fail_status: None,
            write_delay: None,
        }
    }

    /// Writes take `delay` before they land
    pub(crate) fn slow_writes(contents: &str, delay: Duration) -> Self {
        MemoryStore {
            write_delay: Some(delay),
            ..MemoryStore::new(contents)
        }
    }

    /// Every request fails with the given status
    pub(crate) fn failing(status: u16) -> Self {
        MemoryStore {
            fail_status: Some(status),
            ..MemoryStore::new("")
        }
    }

    pub(crate) fn contents(&self) -> String {
        self.contents.lock().unwrap().clone()
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), FetchError> {
        match self.fail_status {
            Some(status) => Err(FetchError::Status {
                url: self.describe(),
                status,
            }),
            None => Ok(()),
        }
    }
}

impl Store for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> Result<String, FetchError> {
        self.check()?;
        Ok(self.contents())
    }

    fn write(&self, fragment: &str) -> Result<(), FetchError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.write_delay {
            thread::sleep(delay);
        }
        self.check()?;
        self.contents.lock().unwrap().push_str(fragment);
        Ok(())
    }
}
