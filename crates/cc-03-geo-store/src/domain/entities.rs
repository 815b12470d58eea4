//! # Domain Entities

use super::errors::GeoError;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use shared_types::LedgerRecord;

/// Geometry and properties stored under a `(collection, key)` pair.
///
/// Both payloads are kept as raw JSON text and never re-formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Geometry payload.
    pub geometry: Box<RawValue>,
    /// Properties payload. Written as `null` when absent.
    #[serde(default)]
    pub properties: Option<Box<RawValue>>,
    /// Caller's geometry text when it carried whitespace around the value.
    #[serde(
        default,
        rename = "geometryText",
        skip_serializing_if = "Option::is_none"
    )]
    geometry_text: Option<String>,
}

impl GeoRecord {
    /// Wrap a caller-supplied geometry.
    ///
    /// The payload must be one JSON value. Its bytes are returned unchanged
    /// by [`GeoRecord::geometry_bytes`], surrounding whitespace included.
    pub fn from_geometry(key: &str, geometry: &str) -> Result<Self, GeoError> {
        let raw =
            RawValue::from_string(geometry.to_string()).map_err(|e| GeoError::InvalidGeometry {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        let geometry_text = (raw.get() != geometry).then(|| geometry.to_string());
        Ok(Self {
            geometry: raw,
            properties: None,
            geometry_text,
        })
    }

    /// Geometry exactly as the caller supplied it.
    pub fn geometry_bytes(&self) -> &[u8] {
        self.geometry_text
            .as_deref()
            .unwrap_or_else(|| self.geometry.get())
            .as_bytes()
    }
}

impl LedgerRecord for GeoRecord {
    const KIND: &'static str = "GeoJSON record";
}

/// Geo store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoConfig {
    /// Collections the store may use. Empty means any.
    pub allowed_collections: Vec<String>,
}

impl GeoConfig {
    /// Check if `collection` may be used.
    pub fn permits(&self, collection: &str) -> bool {
        self.allowed_collections.is_empty()
            || self.allowed_collections.iter().any(|c| c == collection)
    }
}
