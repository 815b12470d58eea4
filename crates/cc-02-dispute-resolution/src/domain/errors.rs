//! # Domain Errors
//!
//! Error types for Dispute Resolution. Every variant that concerns a stored
//! dispute names its id.

use super::value_objects::{DisputeRole, DisputeStatus};
use shared_types::{Classified, CodecError, ErrorKind, LedgerError};
use thiserror::Error;

/// Dispute resolution error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisputeError {
    /// No dispute stored under the id.
    #[error("Dispute not found: {dispute_id}")]
    NotFound {
        /// Requested id
        dispute_id: String,
    },

    /// A dispute already exists under the id.
    #[error("Dispute already exists: {dispute_id}")]
    AlreadyExists {
        /// Colliding id
        dispute_id: String,
    },

    /// A required argument is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// Operation attempted in the wrong lifecycle state.
    #[error("Invalid dispute transition for {dispute_id}: cannot move to {attempted}, expected status {expected} but found {actual}")]
    InvalidTransition {
        /// Dispute id
        dispute_id: String,
        /// Status the operation requires
        expected: DisputeStatus,
        /// Status found on the ledger
        actual: DisputeStatus,
        /// Status the operation would have set
        attempted: DisputeStatus,
    },

    /// Caller is not the party the operation is restricted to.
    #[error("Caller {caller} is not the {role} of dispute {dispute_id}")]
    Unauthorized {
        /// Dispute id
        dispute_id: String,
        /// Required role
        role: DisputeRole,
        /// Identity that attempted the operation
        caller: String,
    },

    /// Record encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The ledger port failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl Classified for DisputeError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::MissingField { .. } => ErrorKind::InvalidArgument,
            Self::InvalidTransition { .. } => ErrorKind::InvalidStateTransition,
            Self::Unauthorized { .. } => ErrorKind::Authorization,
            Self::Codec(e) => e.kind(),
            Self::Ledger(e) => e.kind(),
        }
    }
}
