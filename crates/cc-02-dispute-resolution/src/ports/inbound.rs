//! # Inbound Ports
//!
//! API trait defining what the Dispute Resolution contract can do.

use crate::domain::{Dispute, DisputeError, RaiseParams};
use shared_types::{CallerIdentity, LedgerStub};

/// Dispute resolution API - inbound port.
///
/// Operations restricted to a party take the caller identity as an explicit
/// argument; the contract never asks the stub for it.
pub trait DisputeResolutionApi: Send + Sync {
    /// Open a dispute. Fails if the id is in use.
    fn raise_dispute(
        &self,
        stub: &mut dyn LedgerStub,
        params: RaiseParams,
    ) -> Result<Dispute, DisputeError>;

    /// Record the defendant's answer.
    fn respond_to_dispute(
        &self,
        stub: &mut dyn LedgerStub,
        caller: &CallerIdentity,
        dispute_id: &str,
        response: &str,
    ) -> Result<Dispute, DisputeError>;

    /// Close a responded dispute on behalf of its raiser.
    fn confirm_resolution(
        &self,
        stub: &mut dyn LedgerStub,
        caller: &CallerIdentity,
        dispute_id: &str,
    ) -> Result<Dispute, DisputeError>;

    /// Read a dispute.
    fn get_dispute(
        &self,
        stub: &mut dyn LedgerStub,
        dispute_id: &str,
    ) -> Result<Dispute, DisputeError>;
}
