//! # Shared Types Crate
//!
//! This crate contains everything the contracts and the host agree on:
//! the ledger access port, caller identity, read/write-set tracking, the
//! record codec, and the error taxonomy reported to callers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All contract/host boundary types are defined here.
//! - **Explicit Identity**: Caller identity is obtained from the stub once per
//!   invocation and threaded into handlers as a value. No ambient state.
//! - **Determinism**: Nothing in this crate reads the wall clock or a random
//!   source. Two executions over the same committed state produce the same
//!   read/write-set.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod ledger;
pub mod memory_ledger;
pub mod response;
pub mod rwset;

pub use codec::{decode, encode, LedgerRecord};
pub use entities::CallerIdentity;
pub use errors::*;
pub use ledger::LedgerStub;
pub use memory_ledger::{InMemoryLedger, LedgerTransaction};
pub use response::Response;
pub use rwset::{ReadWriteSet, StateKey};
