use crate::consts::{ENTRY_SENTINEL, FIELD_SENTINEL};
use crate::error::ValidationError;

use super::types::Fragment;

/// Check the visitor's input, first failing rule wins
fn validate(author: &str, message: &str) -> Result<(), ValidationError> {
    if author.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if author.contains(FIELD_SENTINEL) {
        return Err(ValidationError::NameHasTilde);
    }
    if author.contains(ENTRY_SENTINEL) {
        return Err(ValidationError::NameHasGrave);
    }
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    // A tilde in the message is allowed; see Fragment::truncates_on_decode
    if message.contains(ENTRY_SENTINEL) {
        return Err(ValidationError::MessageHasGrave);
    }
    Ok(())
}

pub(crate) fn encode(author: &str, message: &str) -> Result<Fragment, ValidationError> {
    validate(author, message)?;
    Ok(Fragment::wrap(author, message))
}
