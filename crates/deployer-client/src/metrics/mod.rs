//! Metrics seam for controller calls.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are
//! handed to [`crate::State::with_metrics`].
mod backend;
pub use backend::{MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
