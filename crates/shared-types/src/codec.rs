//! # Record Codec
//!
//! Records are stored as JSON documents using the field names existing
//! ledger data was written with. Encoding is deterministic: struct fields
//! serialize in declaration order with no map-ordered content.

use crate::errors::CodecError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type persisted on the ledger.
pub trait LedgerRecord: Serialize + DeserializeOwned {
    /// Human-readable record name used in error messages.
    const KIND: &'static str;
}

/// Serialize a record for storage at `key`.
pub fn encode<R: LedgerRecord>(key: &str, record: &R) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(record).map_err(|e| CodecError::Encode {
        kind: R::KIND,
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Parse the bytes stored at `key`.
pub fn decode<R: LedgerRecord>(key: &str, bytes: &[u8]) -> Result<R, CodecError> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
        kind: R::KIND,
        key: key.to_string(),
        reason: e.to_string(),
    })
}
