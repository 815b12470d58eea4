//! Prometheus metrics for the chaincode.
//!
//! All metrics follow the naming convention: `cc_<area>_<metric>_<unit>`.
//! Metrics only observe; nothing read from them feeds back into contract
//! decisions.

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Instant;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Invocations by function and outcome (success/failure)
    pub static ref INVOCATIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("cc_invocations_total", "Total chaincode invocations"),
        &["function", "outcome"]
    ).expect("metric creation failed");

    /// Failed invocations by error kind
    pub static ref INVOCATION_ERRORS: CounterVec = CounterVec::new(
        Opts::new("cc_invocation_errors_total", "Failed invocations by error kind"),
        &["kind"]
    ).expect("metric creation failed");

    /// Handler execution time
    pub static ref INVOCATION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "cc_invocation_duration_seconds",
            "Time spent executing an invocation handler"
        ).buckets(exponential_buckets(0.00001, 2.0, 16).expect("valid bucket layout")),
        &["function"]
    ).expect("metric creation failed");

    /// Ledger commits by outcome (committed/conflict/rejected)
    pub static ref LEDGER_COMMITS: CounterVec = CounterVec::new(
        Opts::new("cc_ledger_commits_total", "Transaction commits by outcome"),
        &["outcome"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(INVOCATIONS_TOTAL.clone()),
        Box::new(INVOCATION_ERRORS.clone()),
        Box::new(INVOCATION_DURATION.clone()),
        Box::new(LEDGER_COMMITS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record the outcome of one invocation.
pub fn record_invocation(function: &str, error_kind: Option<&str>) {
    match error_kind {
        None => INVOCATIONS_TOTAL
            .with_label_values(&[function, "success"])
            .inc(),
        Some(kind) => {
            INVOCATIONS_TOTAL
                .with_label_values(&[function, "failure"])
                .inc();
            INVOCATION_ERRORS.with_label_values(&[kind]).inc();
        }
    }
}

/// Record the outcome of one commit attempt.
pub fn record_commit(outcome: &str) {
    LEDGER_COMMITS.with_label_values(&[outcome]).inc();
}

/// Timer guard observing `INVOCATION_DURATION` on drop.
pub struct InvocationTimer {
    function: String,
    start: Instant,
}

impl InvocationTimer {
    /// Start timing a handler for `function`.
    pub fn start(function: &str) -> Self {
        Self {
            function: function.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for InvocationTimer {
    fn drop(&mut self) {
        INVOCATION_DURATION
            .with_label_values(&[self.function.as_str()])
            .observe(self.start.elapsed().as_secs_f64());
    }
}
