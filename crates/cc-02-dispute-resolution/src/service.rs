//! # Dispute Resolution Service
//!
//! The dispute contract over a `LedgerStub`.
//!
//! Each operation reads the dispute, checks the transition against the value
//! just read, and writes it back within the same transaction. The host's
//! commit-time read-set validation rejects a transaction whose read went
//! stale, so two concurrent responders cannot both succeed.

use crate::domain::{
    invariant_fields_match_status, Dispute, DisputeConfig, DisputeError, RaiseParams,
};
use crate::ports::inbound::DisputeResolutionApi;
use shared_types::{codec, CallerIdentity, LedgerStub};
use tracing::{debug, info, instrument, warn};

/// The dispute contract.
#[derive(Clone, Debug, Default)]
pub struct DisputeContract {
    config: DisputeConfig,
}

impl DisputeContract {
    /// Create the contract.
    pub fn new(config: DisputeConfig) -> Self {
        Self { config }
    }

    fn load(stub: &mut dyn LedgerStub, dispute_id: &str) -> Result<Dispute, DisputeError> {
        let bytes = stub
            .get_state(dispute_id)?
            .ok_or_else(|| DisputeError::NotFound {
                dispute_id: dispute_id.to_string(),
            })?;
        Ok(codec::decode(dispute_id, &bytes)?)
    }

    fn store(stub: &mut dyn LedgerStub, dispute: &Dispute) -> Result<(), DisputeError> {
        debug_assert!(invariant_fields_match_status(dispute));
        let bytes = codec::encode(&dispute.dispute_id, dispute)?;
        stub.put_state(&dispute.dispute_id, bytes)?;
        Ok(())
    }
}

impl DisputeResolutionApi for DisputeContract {
    #[instrument(skip(self, stub, params), fields(tx_id = %stub.tx_id(), dispute_id = %params.dispute_id))]
    fn raise_dispute(
        &self,
        stub: &mut dyn LedgerStub,
        params: RaiseParams,
    ) -> Result<Dispute, DisputeError> {
        let dispute = Dispute::raise(params)?;

        if stub.state_exists(&dispute.dispute_id)? {
            warn!(dispute_id = %dispute.dispute_id, "Rejected RaiseDispute on an id already in use");
            return Err(DisputeError::AlreadyExists {
                dispute_id: dispute.dispute_id,
            });
        }

        Self::store(stub, &dispute)?;
        info!(
            dispute_id = %dispute.dispute_id,
            raiser = %dispute.raiser,
            defendant = %dispute.defendant,
            "Dispute raised"
        );
        Ok(dispute)
    }

    #[instrument(skip(self, stub, caller, response), fields(tx_id = %stub.tx_id(), caller = %caller))]
    fn respond_to_dispute(
        &self,
        stub: &mut dyn LedgerStub,
        caller: &CallerIdentity,
        dispute_id: &str,
        response: &str,
    ) -> Result<Dispute, DisputeError> {
        let mut dispute = Self::load(stub, dispute_id)?;

        if let Err(e) = dispute.respond(response, caller, self.config.enforce_defendant_response) {
            warn!(dispute_id, status = %dispute.status, error = %e, "RespondToDispute rejected");
            return Err(e);
        }

        Self::store(stub, &dispute)?;
        info!(dispute_id, "Dispute responded");
        Ok(dispute)
    }

    #[instrument(skip(self, stub, caller), fields(tx_id = %stub.tx_id(), caller = %caller))]
    fn confirm_resolution(
        &self,
        stub: &mut dyn LedgerStub,
        caller: &CallerIdentity,
        dispute_id: &str,
    ) -> Result<Dispute, DisputeError> {
        let mut dispute = Self::load(stub, dispute_id)?;

        if let Err(e) = dispute.confirm_resolution(caller) {
            warn!(dispute_id, status = %dispute.status, error = %e, "ConfirmResolution rejected");
            return Err(e);
        }

        Self::store(stub, &dispute)?;
        info!(dispute_id, "Dispute resolved");
        Ok(dispute)
    }

    #[instrument(skip(self, stub), fields(tx_id = %stub.tx_id()))]
    fn get_dispute(
        &self,
        stub: &mut dyn LedgerStub,
        dispute_id: &str,
    ) -> Result<Dispute, DisputeError> {
        let dispute = Self::load(stub, dispute_id)?;
        debug!(dispute_id, status = %dispute.status, "Dispute read");
        Ok(dispute)
    }
}

// =============================================================================
// TESTS
// =============================================================================
