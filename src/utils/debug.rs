use std::sync::atomic::{AtomicBool, Ordering};

/// Set by `--debug`: gates the `[DEBUG]` stderr dumps of decode state
/// (fragments, dropped pieces, counts) and store read timings.
static DEBUG: AtomicBool = AtomicBool::new(false);

pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}
