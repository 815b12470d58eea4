//! # Error Types
//!
//! Defines the error taxonomy reported to callers and the errors raised at
//! the ledger boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure categories surfaced through the invocation surface.
///
/// Every contract error maps onto exactly one kind, so a caller can branch on
/// the category without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Key absent from the ledger.
    NotFound,
    /// Creation attempted on a key that is already in use.
    AlreadyExists,
    /// Stored bytes do not match the expected record shape.
    Decoding,
    /// In-memory record could not be serialized.
    Encoding,
    /// Wrong argument count, unknown function, or malformed argument.
    InvalidArgument,
    /// Operation attempted against a record in the wrong lifecycle state.
    InvalidStateTransition,
    /// Caller identity does not satisfy the required role.
    Authorization,
    /// The ledger access port itself failed.
    Ledger,
}

impl ErrorKind {
    /// Stable name used in responses, logs and metric labels.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFoundError",
            Self::AlreadyExists => "AlreadyExistsError",
            Self::Decoding => "DecodingError",
            Self::Encoding => "EncodingError",
            Self::InvalidArgument => "InvalidArgumentError",
            Self::InvalidStateTransition => "InvalidStateTransitionError",
            Self::Authorization => "AuthorizationError",
            Self::Ledger => "LedgerError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every error that can cross the invocation surface.
pub trait Classified {
    /// The taxonomy category of this error.
    fn kind(&self) -> ErrorKind;
}

/// Errors raised by the ledger access port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Key or collection name rejected by the ledger.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The ledger could not serve the request.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected by the ledger.
    #[error("Write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// A key read by the transaction was changed by a later commit.
    #[error("Read conflict on {key}: read version {read_version:?}, current version {current_version:?}")]
    ReadConflict {
        key: String,
        read_version: Option<u64>,
        current_version: Option<u64>,
    },

    /// The host did not supply a caller identity for this transaction.
    #[error("Caller identity unavailable")]
    IdentityUnavailable,
}

impl Classified for LedgerError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Ledger
    }
}

/// Errors raised by the record codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Record could not be serialized.
    #[error("Failed to encode {kind} {key}: {reason}")]
    Encode {
        kind: &'static str,
        key: String,
        reason: String,
    },

    /// Stored bytes could not be parsed as the expected record.
    #[error("Failed to decode {kind} at key {key}: {reason}")]
    Decode {
        kind: &'static str,
        key: String,
        reason: String,
    },
}

impl Classified for CodecError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Encode { .. } => ErrorKind::Encoding,
            Self::Decode { .. } => ErrorKind::Decoding,
        }
    }
}
