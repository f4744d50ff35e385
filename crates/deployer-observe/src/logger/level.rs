use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// `EnvFilter` directives, checked when the config is loaded.
///
/// ```
/// use deployer_observe::LoggerLevel;
///
/// let lvl = LoggerLevel::new("deployer_client=debug,info").unwrap();
/// assert_eq!(lvl.as_str(), "deployer_client=debug,info");
/// assert!(LoggerLevel::new("deployer_client=chatty").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(directives: impl Into<String>) -> Result<Self, LoggerError> {
        let directives = directives.into();
        parse(&directives)?;
        Ok(Self(directives))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directives from `RUST_LOG` if set and valid, otherwise `self`.
    pub fn or_env(self) -> Self {
        std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .and_then(|raw| Self::new(raw).ok())
            .unwrap_or(self)
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        parse(&self.0).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn parse(directives: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::builder()
        .parse(directives)
        .map_err(|e| LoggerError::InvalidLevel {
            filter: directives.to_string(),
            reason: e.to_string(),
        })
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}
