use serde::Serialize;

use crate::consts::{ENTRY_SENTINEL, FIELD_SENTINEL};

/// One signature in the guestbook. Identity is position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Entry {
    pub(crate) author: String,
    pub(crate) message: String,
}

impl Entry {
    pub(crate) fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Entry {
            author: author.into(),
            message: message.into(),
        }
    }
}

/// Result of decoding a store: the well-formed entries plus a count of
/// fragments that were dropped for lacking a field separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub(crate) entries: Vec<Entry>,
    pub(crate) skipped: usize,
}

/// An encoded entry ready to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment(String);

impl Fragment {
    pub(super) fn wrap(author: &str, message: &str) -> Self {
        let mut s = String::with_capacity(author.len() + message.len() + 3);
        s.push(ENTRY_SENTINEL);
        s.push_str(author);
        s.push(FIELD_SENTINEL);
        s.push_str(message);
        s.push(ENTRY_SENTINEL);
        Fragment(s)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the message carries a field separator of its own, so a
    /// later decode keeps only the text before it.
    pub(crate) fn truncates_on_decode(&self) -> bool {
        self.0.matches(FIELD_SENTINEL).count() > 1
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
