//! # Inbound Ports
//!
//! API trait defining what the Access Control contract can do.

use crate::domain::{AclEntry, AclError, AclParams};
use shared_types::LedgerStub;

/// Access control API - inbound port.
///
/// Every method runs inside the caller's transaction: reads and writes go
/// through `stub` and nothing is applied until the host commits.
pub trait AccessControlApi: Send + Sync {
    /// Create an entry. Fails if `params.id` is in use.
    fn add_acl(&self, stub: &mut dyn LedgerStub, params: AclParams)
        -> Result<AclEntry, AclError>;

    /// Replace the qualifier of an existing entry.
    fn update_acl(
        &self,
        stub: &mut dyn LedgerStub,
        id: &str,
        qualifier: &str,
    ) -> Result<AclEntry, AclError>;

    /// Read an entry.
    fn get_acl(&self, stub: &mut dyn LedgerStub, id: &str) -> Result<AclEntry, AclError>;
}
