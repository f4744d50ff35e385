//! Prometheus backend for deployer client metrics.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use deployer_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let handle: deployer_client::MetricsHandle = Arc::new(metrics.clone());
//! // let st = deployer_client::State::new(caller).with_metrics(handle);
//! # let _ = handle;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `deployer_calls_total{method}` - Counter
//! - `deployer_transport_errors_total{method}` - Counter
//! - `deployer_entity_errors_total{method, code}` - Counter
//! - `deployer_protocol_violations_total{method}` - Counter
//!
//! No HTTP endpoint is provided; gather and encode from the agent's own server.

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
