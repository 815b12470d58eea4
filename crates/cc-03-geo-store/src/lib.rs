//! # CC-03 Geo Store
//!
//! Stores GeoJSON geometry payloads in private data collections and reads
//! back the geometry only.
//!
//! **Contract ID:** 03
//! **Ledger namespace:** `gis` (private collections only)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{GeoConfig, GeoError, GeoRecord};
pub use ports::GeoStoreApi;
pub use service::GeoStore;

/// Ledger namespace of this contract.
pub const NAMESPACE: &str = "gis";
