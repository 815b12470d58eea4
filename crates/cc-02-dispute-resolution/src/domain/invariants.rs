//! # Domain Invariants
//!
//! Business rules for Dispute Resolution.

use super::entities::Dispute;
use super::errors::DisputeError;
use super::value_objects::{DisputeRole, DisputeStatus};
use shared_types::CallerIdentity;

/// Invariant: required arguments are non-empty.
pub fn invariant_required_field(field: &'static str, value: &str) -> Result<(), DisputeError> {
    if value.is_empty() {
        return Err(DisputeError::MissingField { field });
    }
    Ok(())
}

/// Invariant: the dispute is in the state `next` must be reached from.
pub fn invariant_transition_allowed(
    dispute: &Dispute,
    next: DisputeStatus,
) -> Result<(), DisputeError> {
    if !dispute.status.can_transition_to(next) {
        return Err(DisputeError::InvalidTransition {
            dispute_id: dispute.dispute_id.clone(),
            expected: next.predecessor().unwrap_or(next),
            actual: dispute.status,
            attempted: next,
        });
    }
    Ok(())
}

/// Invariant: the caller holds `role` in the dispute.
pub fn invariant_caller_is(
    dispute: &Dispute,
    role: DisputeRole,
    caller: &CallerIdentity,
) -> Result<(), DisputeError> {
    let required = match role {
        DisputeRole::Raiser => &dispute.raiser,
        DisputeRole::Defendant => &dispute.defendant,
    };
    if !caller.is(required) {
        return Err(DisputeError::Unauthorized {
            dispute_id: dispute.dispute_id.clone(),
            role,
            caller: caller.to_string(),
        });
    }
    Ok(())
}

/// Invariant: `confirmRaiser` is set iff the dispute is resolved.
pub fn invariant_fields_match_status(dispute: &Dispute) -> bool {
    dispute.confirm_raiser == (dispute.status == DisputeStatus::Resolved)
}
