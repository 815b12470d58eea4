//! # Ledger Access Port (Driven Port)
//!
//! The transactional key-value interface the host ledger offers to a
//! contract for the duration of one invocation.
//!
//! ## Implementation Notes
//!
//! An adapter implementing this trait should:
//! 1. Scope public state to the namespace of the invoked contract
//! 2. Record every read in the transaction's read-set and every write in its
//!    write-set
//! 3. Apply nothing until the host commits the transaction
//!
//! Reads observe committed state only. A value written earlier in the same
//! transaction is not visible to a later read in that transaction.

use crate::entities::CallerIdentity;
use crate::errors::LedgerError;

/// Transactional key-value access for one invocation.
pub trait LedgerStub {
    /// Transaction identifier assigned by the host.
    ///
    /// For log correlation only. Contract decisions must not depend on it.
    fn tx_id(&self) -> &str;

    /// The principal on whose behalf this transaction executes.
    fn caller_identity(&self) -> Result<CallerIdentity, LedgerError>;

    /// Read a key from the contract's public namespace.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - If the key holds a committed value
    /// * `None` - If the key is absent
    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Queue a write to the contract's public namespace.
    ///
    /// Note: This queues the write. Actual application happens on commit.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Read a key from a named private partition.
    fn get_private_data(
        &mut self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Queue a write to a named private partition.
    fn put_private_data(
        &mut self,
        collection: &str,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), LedgerError>;

    /// Check whether a public key holds a committed value.
    ///
    /// The read is recorded in the read-set like any other.
    fn state_exists(&mut self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.get_state(key)?.is_some())
    }
}
