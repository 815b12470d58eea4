//! # Chaincode Host
//!
//! Development harness for the ledger chaincode. Reads one JSON invocation
//! per line from stdin, executes it against an in-memory ledger, and prints
//! one JSON receipt per line to stdout.
//!
//! ```text
//! $ echo '{"function":"RaiseDispute","args":["D1","alice","bob","late"]}' | chaincode-host
//! {"txId":"…","status":200,"message":"","payload":"","height":1}
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use chaincode_runtime::{ChaincodeConfig, ChaincodeExecutor, Invocation, Receipt};
use chaincode_telemetry::{encode_metrics, init_telemetry, TelemetryConfig};
use shared_types::{ErrorKind, Response};

/// One output line.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    tx_id: Option<String>,
    status: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u64>,
}

impl ReceiptLine {
    fn from_response(tx_id: Option<String>, response: &Response, height: Option<u64>) -> Self {
        Self {
            tx_id,
            status: response.status,
            message: response.message.clone(),
            error_kind: response.error_kind.map(|k| k.as_str()),
            payload: String::from_utf8_lossy(&response.payload).into_owned(),
            height,
        }
    }
}

impl From<&Receipt> for ReceiptLine {
    fn from(receipt: &Receipt) -> Self {
        Self::from_response(
            Some(receipt.tx_id.clone()),
            &receipt.response,
            receipt.committed_height,
        )
    }
}

fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;
    let config = ChaincodeConfig::from_env().context("Failed to load chaincode configuration")?;

    info!(
        version = chaincode_runtime::VERSION,
        enforce_defendant_response = config.disputes.enforce_defendant_response,
        geo_collections = ?config.geo.allowed_collections,
        "Chaincode host starting"
    );

    let executor = ChaincodeExecutor::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read invocation")?;
        if line.trim().is_empty() {
            continue;
        }

        let output = match serde_json::from_str::<Invocation>(&line) {
            Ok(invocation) => ReceiptLine::from(&executor.submit(&invocation)),
            Err(e) => {
                warn!(line = index + 1, error = %e, "Malformed invocation");
                let response = Response::error(
                    ErrorKind::InvalidArgument,
                    format!("Malformed invocation: {e}"),
                );
                ReceiptLine::from_response(None, &response, None)
            }
        };

        serde_json::to_writer(&mut stdout, &output).context("Failed to write receipt")?;
        writeln!(stdout).context("Failed to write receipt")?;
    }
    stdout.flush()?;

    info!(height = executor.ledger().height(), "Input exhausted");
    match encode_metrics() {
        Ok(metrics) => debug!(%metrics, "Final metrics"),
        Err(e) => warn!(error = %e, "Failed to encode metrics"),
    }

    Ok(())
}
