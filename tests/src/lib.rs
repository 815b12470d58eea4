//! # Ledger Chaincode Test Suite
//!
//! Cross-contract scenarios run through the full invocation surface.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the invocation path
//! └── src/
//!     ├── fixtures.rs   # Executor and invocation builders
//!     └── integration/  # Scenarios per contract plus transaction semantics
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cc-tests
//! cargo test -p cc-tests integration::transactions::
//! cargo bench -p cc-tests
//! ```

pub mod fixtures;
