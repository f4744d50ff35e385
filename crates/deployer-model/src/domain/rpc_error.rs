use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::constants::{CODE_NOT_FOUND, CODE_UNAUTHORIZED};

/// Structured error the controller attaches to a single entity in a batched result.
///
/// Presence is modelled with `Option<RpcError>` on the result slot, so an
/// empty code or message is never mistaken for "no error".
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct RpcError {
    /// Machine-readable error code, possibly empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl RpcError {
    pub fn new<C, M>(code: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`CODE_NOT_FOUND`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(CODE_NOT_FOUND, message)
    }

    /// Shorthand for a [`CODE_UNAUTHORIZED`] error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(CODE_UNAUTHORIZED, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.code == CODE_NOT_FOUND
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == CODE_UNAUTHORIZED
    }
}
