use std::sync::Arc;

use prometheus::{CounterVec, Opts, Registry, proto::MetricFamily};

use deployer_client::MetricsBackend;

/// Prometheus metrics backend for the deployer client.
///
/// Label cardinality is bounded: `method` is one of the facility verbs and
/// `code` is an entity error code (empty when the controller sent none).
#[derive(Clone)]
pub struct PrometheusMetrics {
    calls: CounterVec,
    transport_errors: CounterVec,
    entity_errors: CounterVec,
    protocol_violations: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend that registers into `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let calls = CounterVec::new(
            Opts::new("calls_total", "Total number of deployer calls issued").namespace("deployer"),
            &["method"],
        )?;
        registry.register(Box::new(calls.clone()))?;

        let transport_errors = CounterVec::new(
            Opts::new(
                "transport_errors_total",
                "Deployer calls that failed before returning a result",
            )
            .namespace("deployer"),
            &["method"],
        )?;
        registry.register(Box::new(transport_errors.clone()))?;

        let entity_errors = CounterVec::new(
            Opts::new(
                "entity_errors_total",
                "Entities rejected by the controller",
            )
            .namespace("deployer"),
            &["method", "code"],
        )?;
        registry.register(Box::new(entity_errors.clone()))?;

        let protocol_violations = CounterVec::new(
            Opts::new(
                "protocol_violations_total",
                "Batched responses that did not match the request",
            )
            .namespace("deployer"),
            &["method"],
        )?;
        registry.register(Box::new(protocol_violations.clone()))?;

        Ok(Self {
            calls,
            transport_errors,
            entity_errors,
            protocol_violations,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_call(&self, method: &str) {
        self.calls.with_label_values(&[method]).inc();
    }

    fn record_transport_error(&self, method: &str) {
        self.transport_errors.with_label_values(&[method]).inc();
    }

    fn record_entity_error(&self, method: &str, code: &str) {
        self.entity_errors.with_label_values(&[method, code]).inc();
    }

    fn record_protocol_violation(&self, method: &str) {
        self.protocol_violations.with_label_values(&[method]).inc();
    }
}
