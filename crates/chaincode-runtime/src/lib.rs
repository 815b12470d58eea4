//! # Chaincode Runtime
//!
//! The invocation surface shared by the three ledger contracts.
//!
//! ## Invocation Flow
//!
//! ```text
//! Invocation{function, args, caller}
//!        │
//!        ▼
//!   Operation::parse ──error──→ Response(500, InvalidArgument)
//!        │
//!        ▼
//!   begin tx in op.namespace()
//!        │
//!        ▼
//!   ChaincodeRouter::dispatch ──error──→ Response(500, kind)   [tx dropped]
//!        │
//!        ▼
//!   commit (MVCC) ──conflict──→ Response(500, LedgerError)
//!        │
//!        ▼
//!   Response(200, payload)
//! ```
//!
//! ## Namespaces
//!
//! | Operation | Namespace |
//! |-----------|-----------|
//! | `Init` | `lscc` |
//! | `AddACL`, `UpdateACL`, `GetACL` | `acl` |
//! | `RaiseDispute`, `RespondToDispute`, `ConfirmResolution`, `GetDispute` | `drs` |
//! | `AddGeoJSONData`, `GetGeoJSONData` | `gis` |

pub mod config;
pub mod errors;
pub mod executor;
pub mod invocation;
pub mod router;

pub use config::{ChaincodeConfig, ConfigError};
pub use errors::InvocationError;
pub use executor::{ChaincodeExecutor, Invocation, Receipt};
pub use invocation::{Operation, LIFECYCLE_NAMESPACE};
pub use router::{metric_label, ChaincodeRouter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
