//! # Dispute Lifecycle Scenarios
//!
//! ```text
//! RaiseDispute ──→ RAISED ──RespondToDispute(defendant)──→ RESPONDED
//!                                                              │
//!                               ConfirmResolution(raiser) ─────┘──→ RESOLVED
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::{executor, payload_json, raise, submit};
    use chaincode_runtime::{ChaincodeConfig, ChaincodeExecutor};
    use serde_json::json;
    use shared_types::ErrorKind;

    fn status_of(executor: &ChaincodeExecutor, id: &str) -> serde_json::Value {
        payload_json(&submit(executor, None, "GetDispute", &[id]).response)["status"].clone()
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_full_lifecycle_resolves_dispute() {
        let executor = executor();

        let receipt = submit(
            &executor,
            Some("alice"),
            "RaiseDispute",
            &["D1", "alice", "bob", "nonpayment"],
        );
        assert!(receipt.is_committed());

        let receipt = submit(
            &executor,
            Some("bob"),
            "RespondToDispute",
            &["D1", "paid in full"],
        );
        assert!(receipt.is_committed());

        let receipt = submit(&executor, Some("alice"), "ConfirmResolution", &["D1"]);
        assert!(receipt.is_committed());

        let receipt = submit(&executor, Some("carol"), "GetDispute", &["D1"]);
        assert_eq!(
            payload_json(&receipt.response),
            json!({
                "disputeID": "D1",
                "raiser": "alice",
                "defendant": "bob",
                "description": "nonpayment",
                "response": "paid in full",
                "status": "RESOLVED",
                "confirmRaiser": true
            })
        );
    }

    #[test]
    fn test_raised_dispute_initial_fields() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let dispute = payload_json(&submit(&executor, None, "GetDispute", &["D1"]).response);
        assert_eq!(dispute["status"], "RAISED");
        assert_eq!(dispute["response"], "");
        assert_eq!(dispute["confirmRaiser"], false);
    }

    // =========================================================================
    // STATE GUARDS
    // =========================================================================

    #[test]
    fn test_second_response_is_invalid_transition() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        submit(&executor, Some("bob"), "RespondToDispute", &["D1", "first"]);

        let receipt = submit(&executor, Some("bob"), "RespondToDispute", &["D1", "second"]);
        assert_eq!(
            receipt.response.error_kind,
            Some(ErrorKind::InvalidStateTransition)
        );
        assert!(receipt.response.message.contains("D1"));

        let dispute = payload_json(&submit(&executor, None, "GetDispute", &["D1"]).response);
        assert_eq!(dispute["response"], "first");
    }

    #[test]
    fn test_confirm_before_response_is_invalid_transition() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let receipt = submit(&executor, Some("alice"), "ConfirmResolution", &["D1"]);
        assert_eq!(
            receipt.response.error_kind,
            Some(ErrorKind::InvalidStateTransition)
        );
        assert_eq!(status_of(&executor, "D1"), "RAISED");
    }

    #[test]
    fn test_repeated_confirmation_is_invalid_transition() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        submit(&executor, Some("bob"), "RespondToDispute", &["D1", "ok"]);
        submit(&executor, Some("alice"), "ConfirmResolution", &["D1"]);

        let receipt = submit(&executor, Some("alice"), "ConfirmResolution", &["D1"]);
        assert_eq!(
            receipt.response.error_kind,
            Some(ErrorKind::InvalidStateTransition)
        );
    }

    #[test]
    fn test_out_of_sequence_reports_state_before_identity() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        submit(&executor, Some("bob"), "RespondToDispute", &["D1", "ok"]);

        let receipt = submit(&executor, Some("mallory"), "RespondToDispute", &["D1", "x"]);
        assert_eq!(
            receipt.response.error_kind,
            Some(ErrorKind::InvalidStateTransition)
        );
    }

    // =========================================================================
    // AUTHORIZATION
    // =========================================================================

    #[test]
    fn test_confirm_by_non_raiser_is_unauthorized() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        submit(&executor, Some("bob"), "RespondToDispute", &["D1", "ok"]);

        let receipt = submit(&executor, Some("bob"), "ConfirmResolution", &["D1"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::Authorization));
        assert!(receipt.response.message.contains("bob"));
        assert_eq!(status_of(&executor, "D1"), "RESPONDED");
    }

    #[test]
    fn test_respond_by_non_defendant_is_unauthorized() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let receipt = submit(&executor, Some("carol"), "RespondToDispute", &["D1", "mine"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::Authorization));
        assert_eq!(status_of(&executor, "D1"), "RAISED");
    }

    #[test]
    fn test_defendant_check_can_be_disabled() {
        let config = ChaincodeConfig::from_lookup(|key| {
            (key == "CC_ENFORCE_DEFENDANT_RESPONSE").then(|| "false".to_string())
        })
        .unwrap();
        let executor = ChaincodeExecutor::new(config);
        raise(&executor, "D1", "alice", "bob");

        let receipt = submit(&executor, Some("carol"), "RespondToDispute", &["D1", "proxy"]);
        assert!(receipt.is_committed());
        assert_eq!(status_of(&executor, "D1"), "RESPONDED");
    }

    #[test]
    fn test_respond_without_identity_is_ledger_error() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let receipt = submit(&executor, None, "RespondToDispute", &["D1", "anon"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::Ledger));
    }

    // =========================================================================
    // CREATION
    // =========================================================================

    #[test]
    fn test_duplicate_dispute_is_rejected() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let receipt = submit(
            &executor,
            None,
            "RaiseDispute",
            &["D1", "carol", "dave", "other"],
        );
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::AlreadyExists));
    }

    #[test]
    fn test_self_dispute_runs_full_lifecycle() {
        let executor = executor();
        raise(&executor, "D9", "alice", "alice");

        let receipt = submit(&executor, Some("alice"), "RespondToDispute", &["D9", "mine"]);
        assert!(receipt.is_committed());
        let receipt = submit(&executor, Some("alice"), "ConfirmResolution", &["D9"]);
        assert!(receipt.is_committed());
        assert_eq!(status_of(&executor, "D9"), "RESOLVED");
    }

    #[test]
    fn test_get_unknown_dispute_is_not_found() {
        let executor = executor();
        let receipt = submit(&executor, None, "GetDispute", &["D404"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::NotFound));
    }
}
