/// Wraps every entry in the store: "`author~message`"
pub(crate) const ENTRY_SENTINEL: char = '`';

/// Separates author from message inside one entry
pub(crate) const FIELD_SENTINEL: char = '~';

/// Shown instead of the entry list when there is nothing (or only one entry) to display
pub(crate) const EMPTY_PLACEHOLDER: &str =
    "No messages yet, but you can be the first! Just click the (+) button below.";

/// Delay used by the fixed-delay reload policy, matching the page's timer
pub(crate) const DEFAULT_RELOAD_DELAY_MS: u64 = 1000;

/// Global timeout for a single HTTP request
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
