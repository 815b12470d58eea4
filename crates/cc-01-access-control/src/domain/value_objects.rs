//! # Value Objects
//!
//! Immutable types with no identity for the ACL domain.

use super::errors::AclError;
use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Expiration instant of an ACL entry.
///
/// Accepts an RFC 3339 timestamp or integer Unix seconds. The caller's text
/// is kept verbatim and is what gets stored and returned; the parsed UTC
/// instant is only used for expiry questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Validity {
    raw: String,
    instant: DateTime<Utc>,
}

impl Validity {
    /// Parse a caller-supplied validity.
    pub fn parse(raw: &str) -> Result<Self, AclError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AclError::InvalidValidity {
                value: raw.to_string(),
                reason: "value is empty".to_string(),
            });
        }

        let instant = if let Ok(secs) = trimmed.parse::<i64>() {
            DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| AclError::InvalidValidity {
                value: raw.to_string(),
                reason: "Unix seconds out of range".to_string(),
            })?
        } else {
            DateTime::parse_from_rfc3339(trimmed)
                .map(|instant| instant.with_timezone(&Utc))
                .map_err(|e| AclError::InvalidValidity {
                    value: raw.to_string(),
                    reason: e.to_string(),
                })?
        };

        Ok(Self {
            raw: raw.to_string(),
            instant,
        })
    }

    /// Validity at the given Unix second, spelled as decimal seconds.
    #[must_use]
    pub fn from_unix_seconds(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(|instant| Self {
            raw: secs.to_string(),
            instant,
        })
    }

    /// The text as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The instant as Unix seconds.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.instant.timestamp()
    }

    /// The parsed instant, UTC.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// True once `at` is strictly past the validity instant.
    #[must_use]
    pub fn has_passed(&self, at: DateTime<Utc>) -> bool {
        at > self.instant
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Validity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Validity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValidityVisitor)
    }
}

/// Accepts the stored string and legacy integer seconds.
struct ValidityVisitor;

impl Visitor<'_> for ValidityVisitor {
    type Value = Validity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 timestamp or Unix seconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Validity, E> {
        Validity::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Validity, E> {
        Validity::from_unix_seconds(v).ok_or_else(|| E::custom("Unix seconds out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Validity, E> {
        i64::try_from(v)
            .ok()
            .and_then(Validity::from_unix_seconds)
            .ok_or_else(|| E::custom("Unix seconds out of range"))
    }
}
