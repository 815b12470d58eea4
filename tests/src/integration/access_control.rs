//! # ACL Scenarios
//!
//! AddACL / UpdateACL / GetACL through the invocation surface.

#[cfg(test)]
mod tests {
    use crate::fixtures::{executor, payload_json, submit};
    use proptest::prelude::*;
    use serde_json::json;
    use shared_types::ErrorKind;

    // =========================================================================
    // ROUND TRIP
    // =========================================================================

    #[test]
    fn test_add_then_get_returns_input_with_zero_counters() {
        let executor = executor();
        let receipt = submit(
            &executor,
            None,
            "AddACL",
            &["a1", "alice", "parcel/42", "read", "2030-01-01T00:00:00Z"],
        );
        assert!(receipt.is_committed());

        let receipt = submit(&executor, None, "GetACL", &["a1"]);
        assert_eq!(receipt.response.status, 200);
        assert_eq!(
            payload_json(&receipt.response),
            json!({
                "id": "a1",
                "identity": "alice",
                "identifier": "parcel/42",
                "qualifier": "read",
                "validity": "2030-01-01T00:00:00Z",
                "importance": 0,
                "minBehavior": 0,
                "disputeSafeguard": 0
            })
        );
    }

    #[test]
    fn test_validity_is_returned_as_supplied() {
        let executor = executor();
        let inputs = [
            ("a1", "2030-01-01T00:00:00.750+02:00"),
            ("a2", "2030-01-01T00:00:00.5Z"),
            ("a3", "0"),
        ];
        for (id, validity) in inputs {
            submit(&executor, None, "AddACL", &[id, "alice", "r", "read", validity]);
        }
        for (id, validity) in inputs {
            let receipt = submit(&executor, None, "GetACL", &[id]);
            assert_eq!(payload_json(&receipt.response)["validity"], validity);
        }
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    #[test]
    fn test_update_changes_only_qualifier() {
        let executor = executor();
        submit(
            &executor,
            None,
            "AddACL",
            &["a1", "alice", "parcel/42", "read", "1893456000"],
        );
        let before = payload_json(&submit(&executor, None, "GetACL", &["a1"]).response);

        let receipt = submit(&executor, None, "UpdateACL", &["a1", "write"]);
        assert!(receipt.is_committed());

        let after = payload_json(&submit(&executor, None, "GetACL", &["a1"]).response);
        let mut expected = before.clone();
        expected["qualifier"] = json!("write");
        assert_eq!(after, expected);
    }

    #[test]
    fn test_update_missing_entry_is_not_found() {
        let executor = executor();
        let receipt = submit(&executor, None, "UpdateACL", &["ghost", "write"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::NotFound));
        assert!(executor.ledger().is_empty());
    }

    // =========================================================================
    // FAILURES
    // =========================================================================

    #[test]
    fn test_get_missing_entry_is_not_found() {
        let executor = executor();
        let receipt = submit(&executor, None, "GetACL", &["nope"]);
        assert_eq!(receipt.response.status, 500);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::NotFound));
        assert!(receipt.response.message.contains("nope"));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let executor = executor();
        submit(&executor, None, "AddACL", &["a1", "alice", "r", "read", "0"]);
        let receipt = submit(&executor, None, "AddACL", &["a1", "mallory", "r", "admin", "0"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::AlreadyExists));

        let stored = payload_json(&submit(&executor, None, "GetACL", &["a1"]).response);
        assert_eq!(stored["identity"], "alice");
    }

    #[test]
    fn test_unparseable_validity_is_invalid_argument() {
        let executor = executor();
        let receipt = submit(
            &executor,
            None,
            "AddACL",
            &["a1", "alice", "r", "read", "next tuesday"],
        );
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::InvalidArgument));
        assert!(executor.ledger().is_empty());
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_add_get_round_trip(
            id in "[a-zA-Z0-9]{1,16}",
            identity in "[a-z]{1,12}",
            identifier in "[a-z0-9/]{1,24}",
            qualifier in "[a-z]{0,8}",
            seconds in 0i64..4_102_444_800,
        ) {
            let executor = executor();
            let validity = seconds.to_string();
            let receipt = submit(
                &executor,
                None,
                "AddACL",
                &[&id, &identity, &identifier, &qualifier, &validity],
            );
            prop_assert!(receipt.is_committed());

            let got = payload_json(&submit(&executor, None, "GetACL", &[&id]).response);
            prop_assert_eq!(&got["id"], &json!(id));
            prop_assert_eq!(&got["identity"], &json!(identity));
            prop_assert_eq!(&got["identifier"], &json!(identifier));
            prop_assert_eq!(&got["qualifier"], &json!(qualifier));
            prop_assert_eq!(&got["validity"], &json!(validity));
            prop_assert_eq!(&got["importance"], &json!(0));
            prop_assert_eq!(&got["minBehavior"], &json!(0));
            prop_assert_eq!(&got["disputeSafeguard"], &json!(0));
        }
    }
}
