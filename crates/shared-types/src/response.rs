//! # Invocation Response
//!
//! The value returned to the host for every invocation: a status code, an
//! error message, and a payload.

use crate::errors::ErrorKind;
use serde::{Deserialize, Serialize};

/// Status code for a successful invocation.
pub const OK: i32 = 200;

/// Status code for a failed invocation.
pub const ERROR: i32 = 500;

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: i32,
    /// Empty on success.
    pub message: String,
    /// Empty on failure and for writes.
    pub payload: Vec<u8>,
    /// Category of the failure, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_kind: Option<ErrorKind>,
}

impl Response {
    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
            error_kind: None,
        }
    }

    /// Failed response.
    #[must_use]
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
            error_kind: Some(kind),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }

    /// Payload as UTF-8 text, if it is valid UTF-8.
    #[must_use]
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}
