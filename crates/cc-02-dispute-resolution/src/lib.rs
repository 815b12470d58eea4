//! # CC-02 Dispute Resolution
//!
//! Multi-party dispute workflow run as an explicit state machine over
//! ledger-stored records.
//!
//! **Contract ID:** 02
//! **Ledger namespace:** `drs`
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! | Operation | From | To | Caller |
//! |-----------|------|----|--------|
//! | `RaiseDispute` | (absent) | `RAISED` | anyone |
//! | `RespondToDispute` | `RAISED` | `RESPONDED` | defendant (configurable) |
//! | `ConfirmResolution` | `RESPONDED` | `RESOLVED` | raiser |
//! | `GetDispute` | any | unchanged | anyone |
//!
//! The state is checked before the caller: an out-of-sequence call fails with
//! an invalid-transition error regardless of who makes it.
//!
//! ## Module Structure
//!
//! ```text
//! cc-02-dispute-resolution/
//! ├── domain/          # Dispute, DisputeStatus, invariants, errors
//! ├── ports/           # DisputeResolutionApi
//! └── service.rs       # DisputeContract over a LedgerStub
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    invariant_caller_is, invariant_fields_match_status,
    invariant_required_field, invariant_transition_allowed, Dispute, DisputeConfig, DisputeError,
    DisputeRole, DisputeStatus, RaiseParams,
};
pub use ports::DisputeResolutionApi;
pub use service::DisputeContract;

/// Ledger namespace of this contract.
pub const NAMESPACE: &str = "drs";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
