//! # Value Objects
//!
//! Dispute lifecycle states, party roles, and contract configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dispute state machine.
///
/// ```text
/// RAISED ──respond──> RESPONDED ──confirm──> RESOLVED
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeStatus {
    /// Opened by the raiser, awaiting the defendant.
    #[default]
    Raised,
    /// Defendant has answered, awaiting the raiser.
    Responded,
    /// Raiser has confirmed resolution.
    Resolved,
}

impl DisputeStatus {
    /// Check if transition is valid. Forward by exactly one step only.
    pub fn can_transition_to(&self, next: DisputeStatus) -> bool {
        matches!(
            (self, next),
            (Self::Raised, Self::Responded) | (Self::Responded, Self::Resolved)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// The state a dispute must be in to move to `self`.
    pub fn predecessor(&self) -> Option<DisputeStatus> {
        match self {
            Self::Raised => None,
            Self::Responded => Some(Self::Raised),
            Self::Resolved => Some(Self::Responded),
        }
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raised => "RAISED",
            Self::Responded => "RESPONDED",
            Self::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Party role an operation is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisputeRole {
    /// Party who opened the dispute.
    Raiser,
    /// Party the dispute is against.
    Defendant,
}

impl fmt::Display for DisputeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raiser => f.write_str("raiser"),
            Self::Defendant => f.write_str("defendant"),
        }
    }
}

/// Dispute contract configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisputeConfig {
    /// Require the caller of `RespondToDispute` to be the defendant.
    pub enforce_defendant_response: bool,
}

impl Default for DisputeConfig {
    fn default() -> Self {
        Self {
            enforce_defendant_response: true,
        }
    }
}
