use crate::metrics::backend::MetricsBackend;

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_call(&self, _: &str) {}

    #[inline(always)]
    fn record_transport_error(&self, _: &str) {}

    #[inline(always)]
    fn record_entity_error(&self, _: &str, _: &str) {}

    #[inline(always)]
    fn record_protocol_violation(&self, _: &str) {}
}
