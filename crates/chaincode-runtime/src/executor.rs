//! # Transaction Executor
//!
//! Runs each invocation as one transaction against an `InMemoryLedger`:
//! parse, begin a transaction in the owning contract's namespace, dispatch,
//! and commit only if the handler succeeded. A failed handler leaves the
//! ledger untouched.

use crate::config::ChaincodeConfig;
use crate::errors::InvocationError;
use crate::invocation::Operation;
use crate::router::{metric_label, ChaincodeRouter};
use chaincode_telemetry::{log_tx_event, record_commit};
use serde::{Deserialize, Serialize};
use shared_types::{CallerIdentity, InMemoryLedger, LedgerError, ReadWriteSet, Response};
use uuid::Uuid;

/// One invocation as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Host-assigned transaction id. Generated when absent.
    #[serde(default)]
    pub tx_id: Option<String>,
    /// Identity the transaction executes on behalf of.
    #[serde(default)]
    pub caller: Option<String>,
    /// Function name.
    pub function: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    /// Anonymous invocation of `function`.
    pub fn new<I, S>(function: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tx_id: None,
            caller: None,
            function: function.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the caller identity.
    #[must_use]
    pub fn as_caller(mut self, caller: &str) -> Self {
        self.caller = Some(caller.to_string());
        self
    }

    /// Set the transaction id.
    #[must_use]
    pub fn with_tx_id(mut self, tx_id: &str) -> Self {
        self.tx_id = Some(tx_id.to_string());
        self
    }
}

/// Outcome of one executed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Transaction id.
    pub tx_id: String,
    /// Response returned to the client.
    pub response: Response,
    /// Fingerprint of the transaction's read/write-set.
    pub rwset_digest: String,
    /// Ledger height after commit, if the transaction was committed.
    pub committed_height: Option<u64>,
}

impl Receipt {
    /// Check if the transaction's writes were applied.
    pub fn is_committed(&self) -> bool {
        self.committed_height.is_some()
    }
}

/// Executes invocations against an in-memory ledger.
#[derive(Debug, Default)]
pub struct ChaincodeExecutor {
    ledger: InMemoryLedger,
    router: ChaincodeRouter,
}

impl ChaincodeExecutor {
    /// Create an executor over an empty ledger.
    pub fn new(config: ChaincodeConfig) -> Self {
        Self::with_ledger(InMemoryLedger::new(), config)
    }

    /// Create an executor over an existing ledger.
    pub fn with_ledger(ledger: InMemoryLedger, config: ChaincodeConfig) -> Self {
        Self {
            ledger,
            router: ChaincodeRouter::new(config),
        }
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &InMemoryLedger {
        &self.ledger
    }

    /// The router.
    pub fn router(&self) -> &ChaincodeRouter {
        &self.router
    }

    /// Execute and commit on success.
    pub fn submit(&self, invocation: &Invocation) -> Receipt {
        self.run(invocation, true)
    }

    /// Execute without committing, as an endorsing peer would.
    pub fn simulate(&self, invocation: &Invocation) -> Receipt {
        self.run(invocation, false)
    }

    fn run(&self, invocation: &Invocation, commit: bool) -> Receipt {
        let tx_id = invocation
            .tx_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let op = match Operation::parse(&invocation.function, invocation.args.clone()) {
            Ok(op) => op,
            Err(e) => {
                let label = metric_label(&invocation.function, &e);
                return Receipt {
                    response: self.router.reject(label, &tx_id, &e),
                    rwset_digest: ReadWriteSet::new().digest(),
                    committed_height: None,
                    tx_id,
                };
            }
        };

        let function = op.name();
        let caller = invocation.caller.as_deref().map(CallerIdentity::new);
        let mut tx = self
            .ledger
            .begin_with_id(op.namespace(), tx_id.clone(), caller);

        let response = self.router.dispatch(&mut tx, op);
        let rwset_digest = tx.rwset().digest();

        if !response.is_ok() || !commit {
            // Dropping the transaction discards its write-set
            return Receipt {
                tx_id,
                response,
                rwset_digest,
                committed_height: None,
            };
        }

        match tx.commit() {
            Ok((height, _)) => {
                record_commit("committed");
                log_tx_event!(info, function, "Transaction committed", tx_id, height);
                Receipt {
                    tx_id,
                    response,
                    rwset_digest,
                    committed_height: Some(height),
                }
            }
            Err(e) => {
                record_commit(match e {
                    LedgerError::ReadConflict { .. } => "conflict",
                    _ => "rejected",
                });
                let error = InvocationError::from(e);
                Receipt {
                    response: self.router.reject(function, &tx_id, &error),
                    tx_id,
                    rwset_digest,
                    committed_height: None,
                }
            }
        }
    }
}
