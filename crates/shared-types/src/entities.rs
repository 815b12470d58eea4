//! # Shared Entities
//!
//! Value types that every contract sees at the host boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The verified principal on whose behalf a transaction executes.
///
/// Opaque to the contracts: it is only ever compared for equality against
/// identities stored in records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    /// Wrap an identity token supplied by the host.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// The raw identity token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this caller is the given stored identity.
    #[must_use]
    pub fn is(&self, identity: &str) -> bool {
        self.0 == identity
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerIdentity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}
