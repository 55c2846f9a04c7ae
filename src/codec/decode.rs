//! Store decoder
//!
//! Splits the raw store on the entry sentinel and each fragment on the field
//! sentinel. There is no escaping, so anything that doesn't fit the shape is
//! dropped rather than reported.

use crate::consts::{ENTRY_SENTINEL, FIELD_SENTINEL};
use crate::utils::debug_enabled;

use super::types::{Decoded, Entry};

pub(crate) fn decode(raw: &str) -> Decoded {
    let fragments: Vec<&str> = raw.split(ENTRY_SENTINEL).collect();
    if debug_enabled() {
        eprintln!("[DEBUG] decode: {} fragments {:?}", fragments.len(), fragments);
    }

    let mut decoded = Decoded::default();
    for fragment in fragments {
        if !fragment.contains(FIELD_SENTINEL) {
            // Gaps between adjacent sentinels are part of the format, not corruption
            if !fragment.trim().is_empty() {
                decoded.skipped += 1;
                if debug_enabled() {
                    eprintln!("[DEBUG] decode: dropped malformed fragment {:?}", fragment);
                }
            }
            continue;
        }

        let mut fields = fragment.split(FIELD_SENTINEL);
        let author = fields.next().unwrap_or_default();
        let message = fields.next().unwrap_or_default();
        decoded.entries.push(Entry::new(author, message));
    }

    if debug_enabled() {
        eprintln!(
            "[DEBUG] decode: {} entries, {} skipped",
            decoded.entries.len(),
            decoded.skipped
        );
    }
    decoded
}
