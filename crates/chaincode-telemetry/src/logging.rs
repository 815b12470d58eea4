//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! JSON layer (containers) or a human-readable layer (development). Logs go
//! to stderr so that stdout stays free for invocation output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Initialize the global subscriber.
///
/// Fails with `TelemetryError::LoggingInit` if a global subscriber is
/// already installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level {:?}: {e}", config.log_level)))?;

    if !config.console_output {
        tracing_subscriber::registry()
            .with(env_filter)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        return Ok(());
    }

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        channel = %config.channel,
        json_logs = config.json_logs,
        "Structured logging initialized"
    );
    Ok(())
}

/// Log a transaction-scoped event with the standard fields.
///
/// ```rust,ignore
/// log_tx_event!(info, "drs", "Invocation committed", stub.tx_id(), height = 7);
/// ```
#[macro_export]
macro_rules! log_tx_event {
    ($level:ident, $contract:expr, $msg:expr, $tx_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            contract = $contract,
            tx_id = %$tx_id,
            $($($field)*,)?
            $msg
        )
    };
}
