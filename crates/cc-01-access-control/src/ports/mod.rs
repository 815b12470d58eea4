//! # Ports Module
//!
//! The inbound API. The outbound dependency is `shared_types::LedgerStub`.

pub mod inbound;

pub use inbound::*;
