//! # Domain Errors

use shared_types::{Classified, CodecError, ErrorKind, LedgerError};
use thiserror::Error;

/// Geo store error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    /// Nothing stored under the pair.
    #[error("Data not found: {collection}/{key}")]
    NotFound {
        /// Collection name
        collection: String,
        /// Key within the collection
        key: String,
    },

    /// A required argument is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// Geometry payload is not a JSON value.
    #[error("Invalid geometry for key {key}: {reason}")]
    InvalidGeometry {
        /// Target key
        key: String,
        /// Parser message
        reason: String,
    },

    /// Collection is outside the configured allow-list.
    #[error("Collection not allowed: {collection}")]
    CollectionNotAllowed {
        /// Rejected collection
        collection: String,
    },

    /// Record encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The ledger port failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl Classified for GeoError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MissingField { .. }
            | Self::InvalidGeometry { .. }
            | Self::CollectionNotAllowed { .. } => ErrorKind::InvalidArgument,
            Self::Codec(e) => e.kind(),
            Self::Ledger(e) => e.kind(),
        }
    }
}
