//! # Transaction Semantics
//!
//! All-or-nothing commit, MVCC conflict detection between concurrent
//! transactions, and agreement of independent executions.

#[cfg(test)]
mod tests {
    use crate::fixtures::{executor, raise, submit};
    use chaincode_runtime::Invocation;
    use shared_types::{CallerIdentity, ErrorKind, LedgerError, StateKey};
    use std::thread;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // =========================================================================
    // ATOMICITY
    // =========================================================================

    #[test]
    fn test_failed_handler_leaves_ledger_unchanged() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        let height = executor.ledger().height();
        let before = executor.ledger().committed(&StateKey::public("drs", "D1"));

        let receipt = submit(&executor, Some("mallory"), "RespondToDispute", &["D1", "x"]);
        assert!(!receipt.is_committed());
        assert_eq!(executor.ledger().height(), height);
        assert_eq!(
            executor.ledger().committed(&StateKey::public("drs", "D1")),
            before
        );
    }

    #[test]
    fn test_rejected_write_is_ledger_error_and_applies_nothing() {
        let executor = executor();
        executor.ledger().inject_write_failure(true);

        let receipt = submit(&executor, None, "AddACL", &["a1", "alice", "r", "read", "0"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::Ledger));
        assert!(executor.ledger().is_empty());

        executor.ledger().inject_write_failure(false);
        let receipt = submit(&executor, None, "AddACL", &["a1", "alice", "r", "read", "0"]);
        assert!(receipt.is_committed());
    }

    #[test]
    fn test_unavailable_read_is_ledger_error() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        executor.ledger().inject_read_failure(true);

        let receipt = submit(&executor, None, "GetDispute", &["D1"]);
        assert_eq!(receipt.response.error_kind, Some(ErrorKind::Ledger));
    }

    #[test]
    fn test_read_only_commit_keeps_height() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let receipt = submit(&executor, None, "GetDispute", &["D1"]);
        assert_eq!(receipt.committed_height, Some(1));
        assert_eq!(executor.ledger().height(), 1);
    }

    // =========================================================================
    // MVCC
    // =========================================================================

    #[test]
    fn test_concurrent_responses_conflict() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");
        let ledger = executor.ledger();
        let router = executor.router();

        let mut first = ledger.begin("drs", Some(CallerIdentity::new("bob")));
        let mut second = ledger.begin("drs", Some(CallerIdentity::new("bob")));

        assert!(router
            .invoke(&mut first, "RespondToDispute", args(&["D1", "first"]))
            .is_ok());
        assert!(router
            .invoke(&mut second, "RespondToDispute", args(&["D1", "second"]))
            .is_ok());

        first.commit().unwrap();
        let err = second.commit().unwrap_err();
        assert!(matches!(
            err,
            LedgerError::ReadConflict {
                read_version: Some(1),
                current_version: Some(2),
                ..
            }
        ));

        let dispute = crate::fixtures::payload_json(
            &submit(&executor, None, "GetDispute", &["D1"]).response,
        );
        assert_eq!(dispute["response"], "first");
    }

    #[test]
    fn test_racing_creations_commit_exactly_once() {
        let executor = executor();

        let receipts: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let executor = &executor;
                    scope.spawn(move || {
                        let identity = format!("user{i}");
                        submit(
                            executor,
                            None,
                            "AddACL",
                            &["shared", &identity, "r", "read", "0"],
                        )
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let committed = receipts.iter().filter(|r| r.is_committed()).count();
        assert_eq!(committed, 1);
        for receipt in receipts.iter().filter(|r| !r.is_committed()) {
            assert!(matches!(
                receipt.response.error_kind,
                Some(ErrorKind::AlreadyExists) | Some(ErrorKind::Ledger)
            ));
        }
        assert_eq!(executor.ledger().height(), 1);
    }

    #[test]
    fn test_disjoint_keys_all_commit() {
        let executor = executor();

        thread::scope(|scope| {
            for i in 0..8 {
                let executor = &executor;
                scope.spawn(move || {
                    let id = format!("a{i}");
                    let receipt = submit(executor, None, "AddACL", &[&id, "alice", "r", "read", "0"]);
                    assert!(receipt.is_committed());
                });
            }
        });

        assert_eq!(executor.ledger().len(), 8);
        assert_eq!(executor.ledger().height(), 8);
    }

    // =========================================================================
    // DETERMINISM
    // =========================================================================

    #[test]
    fn test_simulations_agree_across_tx_ids() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let respond = Invocation::new("RespondToDispute", ["D1", "paid in full"]).as_caller("bob");
        let a = executor.simulate(&respond.clone().with_tx_id("endorser-a"));
        let b = executor.simulate(&respond.with_tx_id("endorser-b"));

        assert_eq!(a.response, b.response);
        assert_eq!(a.rwset_digest, b.rwset_digest);
        assert_ne!(a.tx_id, b.tx_id);
    }

    #[test]
    fn test_independent_ledgers_agree() {
        let history: &[(&str, &[&str])] = &[
            ("AddACL", &["a1", "alice", "parcel/1", "read", "1893456000"]),
            ("RaiseDispute", &["D1", "alice", "bob", "nonpayment"]),
            ("UpdateACL", &["a1", "write"]),
        ];

        let left = executor();
        let right = executor();
        let mut left_digests = Vec::new();
        let mut right_digests = Vec::new();
        for (function, values) in history {
            left_digests.push(submit(&left, None, function, values).rwset_digest);
            right_digests.push(submit(&right, None, function, values).rwset_digest);
        }

        assert_eq!(left_digests, right_digests);
        assert_eq!(
            left.ledger().committed(&StateKey::public("acl", "a1")),
            right.ledger().committed(&StateKey::public("acl", "a1"))
        );
    }

    #[test]
    fn test_different_arguments_produce_different_digests() {
        let executor = executor();
        raise(&executor, "D1", "alice", "bob");

        let a = executor.simulate(
            &Invocation::new("RespondToDispute", ["D1", "yes"]).as_caller("bob"),
        );
        let b = executor.simulate(
            &Invocation::new("RespondToDispute", ["D1", "no"]).as_caller("bob"),
        );
        assert_ne!(a.rwset_digest, b.rwset_digest);
    }
}
