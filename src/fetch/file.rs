use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::FetchError;
use crate::fetch::Store;

/// Guestbook kept in a local text file; writes append like the server does
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> FetchError {
        FetchError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Store for FileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, FetchError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            // A guestbook nobody has signed yet
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, fragment: &str) -> Result<(), FetchError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(fragment.as_bytes())
            .map_err(|e| self.io_error(e))
    }
}
