//! # Chaincode Telemetry
//!
//! Structured logging and Prometheus metrics for the ledger chaincode.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chaincode_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // Invocations are now logged and counted
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CC_SERVICE_NAME` | `ledger-chaincode` | Service name in logs |
//! | `CC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `CC_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `CC_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `CC_CHANNEL` | `mychannel` | Channel name in logs |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, record_commit, record_invocation, register_metrics, InvocationTimer,
    INVOCATIONS_TOTAL, INVOCATION_DURATION, INVOCATION_ERRORS, LEDGER_COMMITS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Metric registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// A configuration value is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard to hold for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    register_metrics()?;
    init_logging(&config)?;
    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
