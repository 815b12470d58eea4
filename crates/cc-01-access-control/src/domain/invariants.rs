//! # Domain Invariants
//!
//! Business rules for Access Control.

use super::entities::AclEntry;
use super::errors::AclError;

/// Invariant: required arguments are non-empty.
pub fn invariant_required_field(field: &'static str, value: &str) -> Result<(), AclError> {
    if value.is_empty() {
        return Err(AclError::MissingField { field });
    }
    Ok(())
}

/// Invariant: an amendment changes the qualifier and nothing else.
pub fn invariant_only_qualifier_changed(before: &AclEntry, after: &AclEntry) -> bool {
    before.id == after.id
        && before.identity == after.identity
        && before.identifier == after.identifier
        && before.validity == after.validity
        && before.importance == after.importance
        && before.min_behavior == after.min_behavior
        && before.dispute_safeguard == after.dispute_safeguard
}
