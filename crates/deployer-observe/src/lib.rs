//! Logging setup for deployer agents.
//!
//! Client crates only emit `tracing` events and spans; an agent binary calls
//! [`init_logger`] once at startup to decide where they go.
mod logger;
pub use logger::{LoggerConfig, LoggerError, LoggerFormat, LoggerLevel, LoggerResult, init_logger};
