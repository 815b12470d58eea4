//! # Invocation Errors

use cc_01_access_control::AclError;
use cc_02_dispute_resolution::DisputeError;
use cc_03_geo_store::GeoError;
use shared_types::{Classified, CodecError, ErrorKind, LedgerError};
use thiserror::Error;

/// Errors surfaced through the invocation surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// Function name matches no operation.
    #[error("Invalid function name: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments for the function.
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount {
        /// Arguments the function takes
        expected: usize,
        /// Arguments supplied
        got: usize,
    },

    /// ACL contract failure.
    #[error(transparent)]
    Acl(#[from] AclError),

    /// Dispute contract failure.
    #[error(transparent)]
    Dispute(#[from] DisputeError),

    /// Geo store failure.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Response payload could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Ledger failure outside a contract (caller identity, commit).
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl Classified for InvocationError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFunction(_) | Self::ArgumentCount { .. } => ErrorKind::InvalidArgument,
            Self::Acl(e) => e.kind(),
            Self::Dispute(e) => e.kind(),
            Self::Geo(e) => e.kind(),
            Self::Codec(e) => e.kind(),
            Self::Ledger(e) => e.kind(),
        }
    }
}
