//! # In-Memory Ledger
//!
//! Versioned world state with MVCC commit, implementing `LedgerStub` through
//! per-invocation transactions. Used by the development host and by tests;
//! a production host supplies its own stub.
//!
//! ## Commit Rules
//!
//! - Each committed write stamps its key with the new ledger height.
//! - A transaction commits only if every key it read still has the version
//!   it observed; otherwise it fails with `LedgerError::ReadConflict` and
//!   nothing is applied.
//! - A transaction that is dropped without commit applies nothing.

use crate::entities::CallerIdentity;
use crate::errors::LedgerError;
use crate::ledger::LedgerStub;
use crate::rwset::{ReadWriteSet, StateKey};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Prefix reserved by the host for composite keys.
const COMPOSITE_KEY_PREFIX: char = '\u{0}';

#[derive(Clone, Debug)]
struct VersionedValue {
    value: Vec<u8>,
    version: u64,
}

#[derive(Debug, Default)]
struct WorldState {
    entries: HashMap<StateKey, VersionedValue>,
    height: u64,
}

#[derive(Clone, Copy, Debug, Default)]
struct Faults {
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory versioned ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    world: RwLock<WorldState>,
    faults: RwLock<Faults>,
    next_tx: RwLock<u64>,
}

impl InMemoryLedger {
    /// Create an empty ledger at height 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a transaction in `namespace` with a ledger-assigned id.
    pub fn begin(&self, namespace: &str, caller: Option<CallerIdentity>) -> LedgerTransaction<'_> {
        let tx_id = {
            let mut next = self.next_tx.write();
            *next += 1;
            format!("tx-{:08}", *next)
        };
        self.begin_with_id(namespace, tx_id, caller)
    }

    /// Begin a transaction in `namespace` with a host-supplied id.
    pub fn begin_with_id(
        &self,
        namespace: &str,
        tx_id: impl Into<String>,
        caller: Option<CallerIdentity>,
    ) -> LedgerTransaction<'_> {
        LedgerTransaction {
            ledger: self,
            namespace: namespace.to_string(),
            tx_id: tx_id.into(),
            caller,
            rwset: ReadWriteSet::new(),
        }
    }

    /// Validate and apply a transaction's read/write-set.
    ///
    /// Returns the ledger height after the commit.
    pub fn commit(&self, rwset: &ReadWriteSet) -> Result<u64, LedgerError> {
        let mut world = self.world.write();

        for (key, read_version) in rwset.reads() {
            let current_version = world.entries.get(key).map(|v| v.version);
            if current_version != *read_version {
                warn!(
                    key = %key,
                    read_version = ?read_version,
                    current_version = ?current_version,
                    "MVCC read conflict, transaction invalidated"
                );
                return Err(LedgerError::ReadConflict {
                    key: key.to_string(),
                    read_version: *read_version,
                    current_version,
                });
            }
        }

        if rwset.write_count() == 0 {
            return Ok(world.height);
        }

        world.height += 1;
        let version = world.height;
        for (key, value) in rwset.writes() {
            world.entries.insert(
                key.clone(),
                VersionedValue {
                    value: value.clone(),
                    version,
                },
            );
        }

        debug!(
            height = version,
            writes = rwset.write_count(),
            reads = rwset.read_count(),
            "Write-set applied"
        );
        Ok(version)
    }

    /// Committed value at `key`.
    #[must_use]
    pub fn committed(&self, key: &StateKey) -> Option<Vec<u8>> {
        self.world.read().entries.get(key).map(|v| v.value.clone())
    }

    /// Committed version of `key`.
    #[must_use]
    pub fn version(&self, key: &StateKey) -> Option<u64> {
        self.world.read().entries.get(key).map(|v| v.version)
    }

    /// Current ledger height (number of commits that wrote something).
    #[must_use]
    pub fn height(&self) -> u64 {
        self.world.read().height
    }

    /// Number of keys holding a committed value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.world.read().entries.len()
    }

    /// True if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write a value directly into committed state, bypassing contracts.
    ///
    /// Used to stage fixtures such as legacy or corrupted records.
    pub fn put_committed(&self, key: StateKey, value: Vec<u8>) {
        let mut world = self.world.write();
        world.height += 1;
        let version = world.height;
        world
            .entries
            .insert(key, VersionedValue { value, version });
    }

    /// Make every subsequent read fail with `LedgerError::Unavailable`.
    pub fn inject_read_failure(&self, enabled: bool) {
        self.faults.write().fail_reads = enabled;
    }

    /// Make every subsequent write fail with `LedgerError::WriteRejected`.
    pub fn inject_write_failure(&self, enabled: bool) {
        self.faults.write().fail_writes = enabled;
    }

    fn read(&self, key: &StateKey) -> Result<(Option<Vec<u8>>, Option<u64>), LedgerError> {
        if self.faults.read().fail_reads {
            return Err(LedgerError::Unavailable(format!("read of {key} failed")));
        }
        let world = self.world.read();
        Ok(match world.entries.get(key) {
            Some(entry) => (Some(entry.value.clone()), Some(entry.version)),
            None => (None, None),
        })
    }

    fn check_write(&self, key: &StateKey) -> Result<(), LedgerError> {
        if self.faults.read().fail_writes {
            return Err(LedgerError::WriteRejected {
                key: key.to_string(),
                reason: "ledger refused the write".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), LedgerError> {
    if key.is_empty() {
        return Err(LedgerError::InvalidKey("key must not be empty".to_string()));
    }
    if key.starts_with(COMPOSITE_KEY_PREFIX) {
        return Err(LedgerError::InvalidKey(format!(
            "key {key:?} uses the reserved composite-key prefix"
        )));
    }
    Ok(())
}

fn validate_collection(collection: &str) -> Result<(), LedgerError> {
    if collection.is_empty() {
        return Err(LedgerError::InvalidKey(
            "collection name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// One invocation's view of an `InMemoryLedger`.
#[derive(Debug)]
pub struct LedgerTransaction<'a> {
    ledger: &'a InMemoryLedger,
    namespace: String,
    tx_id: String,
    caller: Option<CallerIdentity>,
    rwset: ReadWriteSet,
}

impl LedgerTransaction<'_> {
    /// Namespace the transaction's public state is scoped to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Reads and writes recorded so far.
    #[must_use]
    pub fn rwset(&self) -> &ReadWriteSet {
        &self.rwset
    }

    /// Consume the transaction without committing it.
    #[must_use]
    pub fn into_rwset(self) -> ReadWriteSet {
        self.rwset
    }

    /// Validate and apply this transaction. Returns the new ledger height.
    pub fn commit(self) -> Result<(u64, ReadWriteSet), LedgerError> {
        let height = self.ledger.commit(&self.rwset)?;
        Ok((height, self.rwset))
    }
}

impl LedgerStub for LedgerTransaction<'_> {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn caller_identity(&self) -> Result<CallerIdentity, LedgerError> {
        self.caller.clone().ok_or(LedgerError::IdentityUnavailable)
    }

    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        validate_key(key)?;
        let state_key = StateKey::public(&self.namespace, key);
        let (value, version) = self.ledger.read(&state_key)?;
        self.rwset.record_read(state_key, version);
        Ok(value)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        validate_key(key)?;
        let state_key = StateKey::public(&self.namespace, key);
        self.ledger.check_write(&state_key)?;
        self.rwset.record_write(state_key, value);
        Ok(())
    }

    fn get_private_data(
        &mut self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, LedgerError> {
        validate_collection(collection)?;
        validate_key(key)?;
        let state_key = StateKey::private(&self.namespace, collection, key);
        let (value, version) = self.ledger.read(&state_key)?;
        self.rwset.record_read(state_key, version);
        Ok(value)
    }

    fn put_private_data(
        &mut self,
        collection: &str,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), LedgerError> {
        validate_collection(collection)?;
        validate_key(key)?;
        let state_key = StateKey::private(&self.namespace, collection, key);
        self.ledger.check_write(&state_key)?;
        self.rwset.record_write(state_key, value);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
