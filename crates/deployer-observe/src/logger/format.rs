use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::logger::LoggerError;

/// Where and how log events are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    /// Human-readable lines on stdout.
    #[default]
    Text,
    /// One JSON object per event on stdout.
    Json,
    /// Native journald fields; rejected at install time off Linux.
    Journald,
}

impl LoggerFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
            LoggerFormat::Journald => "journald",
        }
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LoggerFormat::Text, LoggerFormat::Json, LoggerFormat::Journald]
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| LoggerError::UnknownFormat(s.to_string()))
    }
}
