//! Page session
//!
//! load: read -> decode -> render
//! submit: validate -> encode -> write -> reload (full re-read)

use std::thread;
use std::time::{Duration, Instant};

use crate::codec::{decode, encode};
use crate::error::{AppError, FetchError};
use crate::fetch::Fetcher;
use crate::form::{FormState, Icon};
use crate::render::{View, render};
use crate::utils::debug_enabled;

/// When to re-read the store after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReloadPolicy {
    /// Wait for the write to finish, then reload
    AwaitWrite,
    /// Don't wait for the write; reload after a fixed delay
    FixedDelay(Duration),
}

#[derive(Debug)]
pub(crate) struct Loaded {
    pub(crate) view: View,
    pub(crate) skipped: usize,
    /// Set when the read failed; the view is then the placeholder
    pub(crate) failure: Option<FetchError>,
}

#[derive(Debug)]
pub(crate) struct Submitted {
    /// The message held a field separator and will come back cut short
    pub(crate) truncated: bool,
    pub(crate) loaded: Loaded,
}

pub(crate) struct Page {
    fetcher: Fetcher,
    form: FormState,
    reload: ReloadPolicy,
}

impl Page {
    pub(crate) fn new(fetcher: Fetcher, reload: ReloadPolicy) -> Self {
        Page {
            fetcher,
            form: FormState::default(),
            reload,
        }
    }

    pub(crate) fn form(&self) -> FormState {
        self.form
    }

    pub(crate) fn toggle_form(&mut self) -> Icon {
        self.form.toggle()
    }

    pub(crate) fn load(&self) -> Loaded {
        let start = Instant::now();
        let result = self.fetcher.read().wait();
        if debug_enabled() {
            eprintln!(
                "[DEBUG] read {} in {:.2}ms",
                self.fetcher.describe(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }

        match result {
            Ok(raw) => {
                let decoded = decode(&raw);
                Loaded {
                    view: render(decoded.entries),
                    skipped: decoded.skipped,
                    failure: None,
                }
            }
            Err(e) => Loaded {
                view: View::Placeholder,
                skipped: 0,
                failure: Some(e),
            },
        }
    }

    /// Sign the guestbook. A rejected entry never reaches the store and
    /// leaves the form as it was.
    pub(crate) fn submit(&mut self, author: &str, message: &str) -> Result<Submitted, AppError> {
        let fragment = encode(author, message)?;
        let truncated = fragment.truncates_on_decode();
        if debug_enabled() {
            eprintln!("[DEBUG] submit fragment {:?}", fragment.as_str());
        }

        let pending = self.fetcher.write(fragment);
        match self.reload {
            ReloadPolicy::AwaitWrite => pending.wait()?,
            ReloadPolicy::FixedDelay(delay) => {
                pending.detach();
                thread::sleep(delay);
            }
        }

        // A reload starts from a fresh page
        self.form = FormState::Hidden;
        Ok(Submitted {
            truncated,
            loaded: self.load(),
        })
    }
}
