//! # Domain Entities
//!
//! The dispute record and its lifecycle operations.

use super::errors::DisputeError;
use super::invariants::{
    invariant_caller_is, invariant_required_field, invariant_transition_allowed,
};
use super::value_objects::{DisputeRole, DisputeStatus};
use serde::{Deserialize, Serialize};
use shared_types::{CallerIdentity, LedgerRecord};

/// A dispute between two parties.
///
/// Stored under ledger key `disputeID`. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispute {
    /// Primary key.
    #[serde(rename = "disputeID")]
    pub dispute_id: String,
    /// Identity that opened the dispute.
    pub raiser: String,
    /// Identity the dispute is against.
    pub defendant: String,
    /// Free text supplied at creation.
    pub description: String,
    /// Defendant's answer. Empty until responded, immutable after.
    pub response: String,
    /// Lifecycle state.
    pub status: DisputeStatus,
    /// Set when the raiser confirms resolution.
    #[serde(rename = "confirmRaiser")]
    pub confirm_raiser: bool,
}

/// Arguments of `RaiseDispute`, in invocation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaiseParams {
    /// Primary key.
    pub dispute_id: String,
    /// Opening party.
    pub raiser: String,
    /// Accused party.
    pub defendant: String,
    /// Free text.
    pub description: String,
}

impl Dispute {
    /// Open a dispute in `RAISED`.
    pub fn raise(params: RaiseParams) -> Result<Self, DisputeError> {
        invariant_required_field("disputeID", &params.dispute_id)?;
        invariant_required_field("raiser", &params.raiser)?;
        invariant_required_field("defendant", &params.defendant)?;

        Ok(Self {
            dispute_id: params.dispute_id,
            raiser: params.raiser,
            defendant: params.defendant,
            description: params.description,
            response: String::new(),
            status: DisputeStatus::Raised,
            confirm_raiser: false,
        })
    }

    /// `RAISED -> RESPONDED`, recording the defendant's answer.
    ///
    /// With `require_defendant` the caller must be the defendant. The state
    /// is checked first, so an out-of-sequence call is reported as such
    /// whoever makes it. Nothing is modified on error.
    pub fn respond(
        &mut self,
        response: impl Into<String>,
        caller: &CallerIdentity,
        require_defendant: bool,
    ) -> Result<(), DisputeError> {
        invariant_transition_allowed(self, DisputeStatus::Responded)?;
        if require_defendant {
            invariant_caller_is(self, DisputeRole::Defendant, caller)?;
        }
        self.response = response.into();
        self.status = DisputeStatus::Responded;
        Ok(())
    }

    /// `RESPONDED -> RESOLVED`. Only the raiser may confirm.
    pub fn confirm_resolution(&mut self, caller: &CallerIdentity) -> Result<(), DisputeError> {
        invariant_transition_allowed(self, DisputeStatus::Resolved)?;
        invariant_caller_is(self, DisputeRole::Raiser, caller)?;
        self.confirm_raiser = true;
        self.status = DisputeStatus::Resolved;
        Ok(())
    }

    /// Check if the dispute is closed.
    pub fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }
}

impl LedgerRecord for Dispute {
    const KIND: &'static str = "dispute";
}
