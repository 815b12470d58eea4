//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to write logs to stderr at all
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Channel the chaincode is deployed on
    pub channel: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "ledger-chaincode".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            channel: "mychannel".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CC_SERVICE_NAME`: Service name (default: ledger-chaincode)
    /// - `CC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `CC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `CC_CHANNEL`: Channel name (default: mychannel)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let is_container =
            lookup("KUBERNETES_SERVICE_HOST").is_some() || lookup("DOCKER_CONTAINER").is_some();

        Self {
            service_name: lookup("CC_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("CC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("CC_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: lookup("CC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            channel: lookup("CC_CHANNEL").unwrap_or(defaults.channel),
        }
    }
}
