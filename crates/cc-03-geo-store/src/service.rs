//! # Geo Store Service

use crate::domain::{GeoConfig, GeoError, GeoRecord};
use crate::ports::inbound::GeoStoreApi;
use shared_types::{codec, LedgerStub};
use tracing::{debug, info, instrument, warn};

/// The GeoJSON contract.
#[derive(Debug, Clone, Default)]
pub struct GeoStore {
    config: GeoConfig,
}

impl GeoStore {
    /// Create the contract.
    pub fn new(config: GeoConfig) -> Self {
        Self { config }
    }

    fn check_target(&self, collection: &str, key: &str) -> Result<(), GeoError> {
        if collection.is_empty() {
            return Err(GeoError::MissingField {
                field: "collection",
            });
        }
        if key.is_empty() {
            return Err(GeoError::MissingField { field: "key" });
        }
        if !self.config.permits(collection) {
            warn!(collection, "Collection outside the allow-list");
            return Err(GeoError::CollectionNotAllowed {
                collection: collection.to_string(),
            });
        }
        Ok(())
    }
}

impl GeoStoreApi for GeoStore {
    #[instrument(skip(self, stub, geometry), fields(tx_id = %stub.tx_id()))]
    fn add_geojson_data(
        &self,
        stub: &mut dyn LedgerStub,
        collection: &str,
        key: &str,
        geometry: &str,
    ) -> Result<(), GeoError> {
        self.check_target(collection, key)?;
        let record = GeoRecord::from_geometry(key, geometry)?;
        let bytes = codec::encode(key, &record)?;
        stub.put_private_data(collection, key, bytes)?;
        info!(collection, key, size = geometry.len(), "GeoJSON data stored");
        Ok(())
    }

    #[instrument(skip(self, stub), fields(tx_id = %stub.tx_id()))]
    fn get_geojson_data(
        &self,
        stub: &mut dyn LedgerStub,
        collection: &str,
        key: &str,
    ) -> Result<Vec<u8>, GeoError> {
        self.check_target(collection, key)?;
        let bytes = stub
            .get_private_data(collection, key)?
            .ok_or_else(|| GeoError::NotFound {
                collection: collection.to_string(),
                key: key.to_string(),
            })?;
        let record: GeoRecord = codec::decode(key, &bytes)?;
        debug!(collection, key, "GeoJSON data read");
        Ok(record.geometry_bytes().to_vec())
    }
}
