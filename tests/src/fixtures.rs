//! Shared builders for the integration scenarios and benchmarks.

use chaincode_runtime::{ChaincodeConfig, ChaincodeExecutor, Invocation, Receipt};
use shared_types::Response;

/// Executor over an empty ledger with default configuration.
pub fn executor() -> ChaincodeExecutor {
    ChaincodeExecutor::new(ChaincodeConfig::default())
}

/// Submit `function(args)` as `caller`, or anonymously when `None`.
pub fn submit(
    executor: &ChaincodeExecutor,
    caller: Option<&str>,
    function: &str,
    args: &[&str],
) -> Receipt {
    let mut invocation = Invocation::new(function, args.iter().copied());
    if let Some(caller) = caller {
        invocation = invocation.as_caller(caller);
    }
    executor.submit(&invocation)
}

/// Decode a JSON response payload.
pub fn payload_json(response: &Response) -> serde_json::Value {
    serde_json::from_slice(&response.payload).unwrap_or(serde_json::Value::Null)
}

/// Raise dispute `id` between `raiser` and `defendant` and assert it committed.
pub fn raise(executor: &ChaincodeExecutor, id: &str, raiser: &str, defendant: &str) {
    let receipt = submit(
        executor,
        None,
        "RaiseDispute",
        &[id, raiser, defendant, "nonpayment"],
    );
    assert!(receipt.is_committed(), "raise failed: {}", receipt.response.message);
}
