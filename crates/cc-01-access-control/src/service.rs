//! # Access Control Service
//!
//! The ACL contract over a `LedgerStub`. Stateless: everything it knows is
//! read from the stub within the current transaction.

use crate::domain::{invariant_only_qualifier_changed, AclEntry, AclError, AclParams};
use crate::ports::inbound::AccessControlApi;
use shared_types::{codec, LedgerStub};
use tracing::{debug, info, instrument, warn};

/// The ACL contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessControlContract;

impl AccessControlContract {
    /// Create the contract.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn load(stub: &mut dyn LedgerStub, id: &str) -> Result<AclEntry, AclError> {
        let bytes = stub.get_state(id)?.ok_or_else(|| AclError::NotFound {
            id: id.to_string(),
        })?;
        Ok(codec::decode(id, &bytes)?)
    }

    fn store(stub: &mut dyn LedgerStub, entry: &AclEntry) -> Result<(), AclError> {
        let bytes = codec::encode(&entry.id, entry)?;
        stub.put_state(&entry.id, bytes)?;
        Ok(())
    }
}

impl AccessControlApi for AccessControlContract {
    #[instrument(skip(self, stub, params), fields(tx_id = %stub.tx_id(), id = %params.id))]
    fn add_acl(
        &self,
        stub: &mut dyn LedgerStub,
        params: AclParams,
    ) -> Result<AclEntry, AclError> {
        let entry = AclEntry::create(params)?;

        if stub.state_exists(&entry.id)? {
            warn!(id = %entry.id, "Rejected AddACL on an id already in use");
            return Err(AclError::AlreadyExists { id: entry.id });
        }

        Self::store(stub, &entry)?;
        info!(
            id = %entry.id,
            identity = %entry.identity,
            identifier = %entry.identifier,
            qualifier = %entry.qualifier,
            validity = %entry.validity,
            "ACL entry created"
        );
        Ok(entry)
    }

    #[instrument(skip(self, stub), fields(tx_id = %stub.tx_id()))]
    fn update_acl(
        &self,
        stub: &mut dyn LedgerStub,
        id: &str,
        qualifier: &str,
    ) -> Result<AclEntry, AclError> {
        let before = Self::load(stub, id)?;
        let mut entry = before.clone();
        entry.amend_qualifier(qualifier);
        debug_assert!(invariant_only_qualifier_changed(&before, &entry));

        Self::store(stub, &entry)?;
        info!(
            id,
            from = %before.qualifier,
            to = %entry.qualifier,
            "ACL qualifier amended"
        );
        Ok(entry)
    }

    #[instrument(skip(self, stub), fields(tx_id = %stub.tx_id()))]
    fn get_acl(&self, stub: &mut dyn LedgerStub, id: &str) -> Result<AclEntry, AclError> {
        let entry = Self::load(stub, id)?;
        debug!(id, "ACL entry read");
        Ok(entry)
    }
}

// =============================================================================
// TESTS
// =============================================================================
