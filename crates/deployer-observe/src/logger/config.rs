use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{LoggerFormat, LoggerLevel};

/// Logging section of an agent config file. Missing keys take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    /// Include the event target (module path).
    pub with_targets: bool,
    /// Attach span fields such as `method` and `tag` to JSON events.
    pub with_spans: bool,
    /// Colour text output; ignored when stdout is not a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: LoggerLevel::default(),
            with_targets: true,
            with_spans: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
