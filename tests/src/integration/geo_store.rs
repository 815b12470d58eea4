//! # Geo Store Scenarios

#[cfg(test)]
mod tests {
    use crate::fixtures::{executor, submit};
    use chaincode_runtime::{ChaincodeConfig, ChaincodeExecutor};
    use shared_types::{ErrorKind, StateKey};

    const PARCEL: &str = r#"{"type":"Polygon","coordinates":[[[0.5,1.25],[2,1.25],[2,3],[0.5,1.25]]]}"#;

    #[test]
    fn test_geometry_round_trips_byte_for_byte() {
        let executor = executor();
        let receipt = submit(&executor, None, "AddGeoJSONData", &["parcels", "p1", PARCEL]);
        assert!(receipt.is_committed());

        let receipt = submit(&executor, None, "GetGeoJSONData", &["parcels", "p1"]);
        assert_eq!(receipt.response.payload, PARCEL.as_bytes());
    }

    #[test]
    fn test_geometry_lands_in_private_partition() {
        let executor = executor();
        submit(&executor, None, "addGeoJSONData", &["parcels", "p1", PARCEL]);

        let ledger = executor.ledger();
        assert!(ledger
            .committed(&StateKey::private("gis", "parcels", "p1"))
            .is_some());
        assert!(ledger.committed(&StateKey::public("gis", "p1")).is_none());
    }

    #[test]
    fn test_partitions_are_isolated() {
        let executor = executor();
        submit(&executor, None, "AddGeoJSONData", &["parcels", "p1", PARCEL]);

        let receipt = submit(&executor, None, "GetGeoJSONData", &["roads", "p1"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::NotFound));
        assert_eq!(receipt.response.message, "Data not found: roads/p1");
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let executor = executor();
        let receipt = submit(
            &executor,
            None,
            "AddGeoJSONData",
            &["parcels", "p1", "{not json"],
        );
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::InvalidArgument));
        assert!(executor.ledger().is_empty());
    }

    #[test]
    fn test_collection_allow_list() {
        let config = ChaincodeConfig::from_lookup(|key| {
            (key == "CC_GEO_COLLECTIONS").then(|| "parcels".to_string())
        })
        .unwrap();
        let executor = ChaincodeExecutor::new(config);

        let allowed = submit(&executor, None, "AddGeoJSONData", &["parcels", "p1", PARCEL]);
        assert!(allowed.is_committed());

        let denied = submit(&executor, None, "AddGeoJSONData", &["secret", "p1", PARCEL]);
        assert_eq!(denied.response.error_kind, Some(ErrorKind::InvalidArgument));
    }

    #[test]
    fn test_overwrite_replaces_geometry() {
        let executor = executor();
        submit(&executor, None, "AddGeoJSONData", &["parcels", "p1", PARCEL]);
        let point = r#"{"type":"Point","coordinates":[1,2]}"#;
        submit(&executor, None, "AddGeoJSONData", &["parcels", "p1", point]);

        let receipt = submit(&executor, None, "GetGeoJSONData", &["parcels", "p1"]);
        assert_eq!(receipt.response.payload_str(), Some(point));
    }
}
