//! # Domain Errors
//!
//! Error types for Access Control.

use shared_types::{Classified, CodecError, ErrorKind, LedgerError};
use thiserror::Error;

/// Access control error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AclError {
    /// No entry stored under the id.
    #[error("ACL entry not found: {id}")]
    NotFound {
        /// Requested id
        id: String,
    },

    /// An entry already exists under the id.
    #[error("ACL entry already exists: {id}")]
    AlreadyExists {
        /// Colliding id
        id: String,
    },

    /// A required argument is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// Validity could not be parsed.
    #[error("Invalid validity {value:?}: {reason}")]
    InvalidValidity {
        /// Supplied value
        value: String,
        /// Parser message
        reason: String,
    },

    /// Record encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The ledger port failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl Classified for AclError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::MissingField { .. } | Self::InvalidValidity { .. } => ErrorKind::InvalidArgument,
            Self::Codec(e) => e.kind(),
            Self::Ledger(e) => e.kind(),
        }
    }
}
