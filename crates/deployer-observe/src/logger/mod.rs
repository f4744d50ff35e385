mod config;
mod error;
mod format;
mod level;
mod timer;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;

use tracing::Subscriber;
use tracing_subscriber::{
    Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

use timer::UtcRfc3339;

/// Installs the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a global subscriber is
/// already set, and with [`LoggerError::JournaldNotSupported`] when journald
/// output is requested off Linux.
///
/// # Examples
/// ```rust
/// use deployer_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger must initialize once");
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    let registry = tracing_subscriber::registry().with(cfg.level.to_env_filter());
    let installed = match cfg.format {
        LoggerFormat::Text => registry.with(text_layer(cfg)).try_init(),
        LoggerFormat::Json => registry.with(json_layer(cfg)).try_init(),
        LoggerFormat::Journald => registry.with(journald_layer()?).try_init(),
    };
    installed.map_err(|_| LoggerError::AlreadyInitialized)
}

/// Text lines; enclosing spans (`facility`, `method`, `tag`) print as a prefix.
fn text_layer<S>(cfg: &LoggerConfig) -> impl Layer<S> + use<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339)
}

/// One JSON object per event; span fields are attached when `with_spans` is set.
fn json_layer<S>(cfg: &LoggerConfig) -> impl Layer<S> + use<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_current_span(cfg.with_spans)
        .with_span_list(cfg.with_spans)
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339)
}

#[cfg(target_os = "linux")]
fn journald_layer() -> LoggerResult<tracing_journald::Layer> {
    tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn journald_layer() -> LoggerResult<tracing_subscriber::layer::Identity> {
    Err(LoggerError::JournaldNotSupported)
}
