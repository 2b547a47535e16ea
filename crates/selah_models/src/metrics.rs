//! Metrics for generation calls.
//!
//! OpenTelemetry instruments recording request counts, failures by kind and
//! call latency. Nothing is exported unless the host installs a meter
//! provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<GenerationMetrics> = OnceLock::new();

/// Instruments shared by every generator in the process.
///
/// Labels: `provider`, `model`, `operation` (`script` or `tone`) and, for
/// errors, `error_type`.
#[derive(Clone)]
pub struct GenerationMetrics {
    _meter: Meter,
    /// Total generation requests
    pub requests: Counter<u64>,
    /// Failed generation requests
    pub errors: Counter<u64>,
    /// Request duration in seconds
    pub duration: Histogram<f64>,
}

impl GenerationMetrics {
    fn init() -> Self {
        let meter = global::meter("selah_generation");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("selah.generation.requests")
                .with_description("Total generation requests")
                .build(),
            errors: meter
                .u64_counter("selah.generation.errors")
                .with_description("Failed generation requests")
                .build(),
            duration: meter
                .f64_histogram("selah.generation.duration")
                .with_unit("seconds")
                .with_description("Generation request duration")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a completed request, successful or not.
    pub fn record_request(&self, provider: &str, model: &str, operation: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("operation", operation.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, operation: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}
