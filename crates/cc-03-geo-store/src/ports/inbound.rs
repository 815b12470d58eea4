//! # Inbound Ports

use crate::domain::GeoError;
use shared_types::LedgerStub;

/// Geo store API - inbound port.
pub trait GeoStoreApi: Send + Sync {
    /// Store a geometry payload in a private collection.
    fn add_geojson_data(
        &self,
        stub: &mut dyn LedgerStub,
        collection: &str,
        key: &str,
        geometry: &str,
    ) -> Result<(), GeoError>;

    /// Read back the geometry payload only.
    fn get_geojson_data(
        &self,
        stub: &mut dyn LedgerStub,
        collection: &str,
        key: &str,
    ) -> Result<Vec<u8>, GeoError>;
}
