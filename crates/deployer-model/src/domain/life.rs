use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Lifecycle state of a controller-managed entity.
///
/// Values only move forward on the controller: `Alive -> Dying -> Dead`.
/// A client holds whatever it last fetched and never advances it locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Life {
    /// Entity is live and may be deployed.
    Alive,
    /// Entity has been asked to go away but still has cleanup pending.
    Dying,
    /// Entity is finished; only removal remains.
    Dead,
}

impl Life {
    /// Returns the wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Life::Alive => "alive",
            Life::Dying => "dying",
            Life::Dead => "dead",
        }
    }

    pub const fn is_alive(&self) -> bool {
        matches!(self, Life::Alive)
    }
}

impl fmt::Display for Life {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts exactly the wire strings, the same set serde accepts.
impl FromStr for Life {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        [Life::Alive, Life::Dying, Life::Dead]
            .into_iter()
            .find(|life| life.as_str() == s)
            .ok_or_else(|| ModelError::UnknownLife(s.to_string()))
    }
}
