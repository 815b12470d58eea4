//! # Read/Write Sets
//!
//! The keys read and written by one transaction. The host uses the read-set
//! for MVCC validation at commit and compares write-sets across independent
//! executions of the same proposal.
//!
//! Both sets are ordered maps so that iteration order, and therefore the
//! digest, depends only on content.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

/// Fully qualified ledger key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StateKey {
    /// Key in a contract's public namespace.
    Public { namespace: String, key: String },
    /// Key in a named private partition of a contract's namespace.
    Private {
        namespace: String,
        collection: String,
        key: String,
    },
}

impl StateKey {
    /// Public key in `namespace`.
    pub fn public(namespace: &str, key: &str) -> Self {
        Self::Public {
            namespace: namespace.to_string(),
            key: key.to_string(),
        }
    }

    /// Private key in `namespace`/`collection`.
    pub fn private(namespace: &str, collection: &str, key: &str) -> Self {
        Self::Private {
            namespace: namespace.to_string(),
            collection: collection.to_string(),
            key: key.to_string(),
        }
    }

    fn write_canonical(&self, hasher: &mut Sha256) {
        match self {
            Self::Public { namespace, key } => {
                hasher.update([0u8]);
                write_field(hasher, namespace.as_bytes());
                write_field(hasher, key.as_bytes());
            }
            Self::Private {
                namespace,
                collection,
                key,
            } => {
                hasher.update([1u8]);
                write_field(hasher, namespace.as_bytes());
                write_field(hasher, collection.as_bytes());
                write_field(hasher, key.as_bytes());
            }
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public { namespace, key } => write!(f, "{namespace}/{key}"),
            Self::Private {
                namespace,
                collection,
                key,
            } => write!(f, "{namespace}/${collection}/{key}"),
        }
    }
}

/// Length-prefixed field so that ("ab", "c") and ("a", "bc") hash differently.
fn write_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}

/// Reads and writes performed by one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadWriteSet {
    /// Key -> committed version observed (`None` if the key was absent).
    reads: BTreeMap<StateKey, Option<u64>>,
    /// Key -> value to apply on commit. Last write wins.
    writes: BTreeMap<StateKey, Vec<u8>>,
}

impl ReadWriteSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a read. The first observed version of a key is kept.
    pub fn record_read(&mut self, key: StateKey, version: Option<u64>) {
        self.reads.entry(key).or_insert(version);
    }

    /// Record a write.
    pub fn record_write(&mut self, key: StateKey, value: Vec<u8>) {
        self.writes.insert(key, value);
    }

    /// Keys read, with the version observed.
    pub fn reads(&self) -> impl Iterator<Item = (&StateKey, &Option<u64>)> {
        self.reads.iter()
    }

    /// Keys written, with the value to apply.
    pub fn writes(&self) -> impl Iterator<Item = (&StateKey, &Vec<u8>)> {
        self.writes.iter()
    }

    /// Pending value for `key`, if this transaction wrote it.
    #[must_use]
    pub fn written(&self, key: &StateKey) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys read.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.len()
    }

    /// Number of distinct keys written.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// True if the transaction neither read nor wrote anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }

    /// SHA-256 fingerprint of the set, hex encoded.
    ///
    /// Two executions agree iff their digests are equal.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.reads.len() as u64).to_be_bytes());
        for (key, version) in &self.reads {
            key.write_canonical(&mut hasher);
            match version {
                Some(v) => {
                    hasher.update([1u8]);
                    hasher.update(v.to_be_bytes());
                }
                None => hasher.update([0u8]),
            }
        }
        hasher.update((self.writes.len() as u64).to_be_bytes());
        for (key, value) in &self.writes {
            key.write_canonical(&mut hasher);
            write_field(&mut hasher, value);
        }
        hex::encode(hasher.finalize())
    }
}
