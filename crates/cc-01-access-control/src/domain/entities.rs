//! # Domain Entities
//!
//! The ACL entry and the arguments it is created from.

use super::errors::AclError;
use super::invariants::invariant_required_field;
use super::value_objects::Validity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::LedgerRecord;

/// Access-control entry binding an identity to a resource and a permission.
///
/// Stored under ledger key `id`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclEntry {
    /// Primary key. Immutable after creation.
    pub id: String,
    /// Subject the entry governs.
    pub identity: String,
    /// Resource or scope the entry governs.
    pub identifier: String,
    /// Granted permission or role label. The only amendable field.
    pub qualifier: String,
    /// Expiration instant.
    pub validity: Validity,
    /// Weight used by downstream policy evaluation.
    pub importance: u32,
    /// Minimum behaviour score required to exercise the entry.
    pub min_behavior: u32,
    /// Reserved for dispute-driven suspension.
    pub dispute_safeguard: u32,
}

impl AclEntry {
    /// Build a fresh entry from validated arguments. Counters start at zero.
    pub fn create(params: AclParams) -> Result<Self, AclError> {
        invariant_required_field("id", &params.id)?;
        invariant_required_field("identity", &params.identity)?;
        invariant_required_field("identifier", &params.identifier)?;
        let validity = Validity::parse(&params.validity)?;

        Ok(Self {
            id: params.id,
            identity: params.identity,
            identifier: params.identifier,
            qualifier: params.qualifier,
            validity,
            importance: 0,
            min_behavior: 0,
            dispute_safeguard: 0,
        })
    }

    /// Replace the qualifier.
    pub fn amend_qualifier(&mut self, qualifier: impl Into<String>) {
        self.qualifier = qualifier.into();
    }

    /// True if the entry is logically expired at `at`.
    ///
    /// The instant is supplied by the caller; the contract never reads a clock.
    #[must_use]
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.validity.has_passed(at)
    }
}

impl LedgerRecord for AclEntry {
    const KIND: &'static str = "ACL entry";
}

/// Raw arguments of `AddACL`, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclParams {
    /// Primary key.
    pub id: String,
    /// Governed subject.
    pub identity: String,
    /// Governed resource.
    pub identifier: String,
    /// Permission label. May be empty.
    pub qualifier: String,
    /// RFC 3339 timestamp or Unix seconds.
    pub validity: String,
}
