//! # CC-01 Access Control
//!
//! Access-control entries binding an identity, a resource identifier, and a
//! permission qualifier, with validity and behavioural constraints.
//!
//! **Contract ID:** 01
//! **Ledger namespace:** `acl`
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Invariants
//!
//! | Rule | Enforcement |
//! |------|-------------|
//! | `id` unique in the namespace | `AddACL` fails with `AlreadyExists` |
//! | Counters never negative | `u32` fields, negative stored values fail to decode |
//! | Only `qualifier` is amendable | `UpdateACL` rewrites one field |
//! | No wall clock | Expiry is checked against a caller-supplied instant |
//!
//! ## Module Structure
//!
//! ```text
//! cc-01-access-control/
//! ├── domain/          # AclEntry, Validity, invariants, errors
//! ├── ports/           # AccessControlApi
//! └── service.rs       # AccessControlContract over a LedgerStub
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    invariant_only_qualifier_changed, invariant_required_field, AclEntry, AclError, AclParams,
    Validity,
};
pub use ports::AccessControlApi;
pub use service::AccessControlContract;

/// Ledger namespace of this contract.
pub const NAMESPACE: &str = "acl";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
